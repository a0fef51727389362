//! Plain-text export of a calculation, for pasting into notes.

use crate::engine::CalculationResult;

/// Render `result` as one `Label: value` line per report field.
pub fn format_summary(result: &CalculationResult) -> String {
    let lines = [
        format!("DOB: {}", result.dob),
        format!("TOB: {}", result.tob),
        format!("AOG: {}", result.aog),
        format!("HOL: {:.1} hours", result.hol),
        format!("TcB: {} mg/dL", result.tcb),
        format!("Bhutani zone: {}", result.bhutani_zone),
        format!(
            "Phototherapy threshold: {} mg/dL ({})",
            result.phototherapy.threshold, result.phototherapy.status
        ),
        format!(
            "Exchange transfusion threshold: {} mg/dL ({})",
            result.exchange_transfusion.threshold, result.exchange_transfusion.status
        ),
    ];

    lines.join("\n")
}
