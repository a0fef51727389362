//! Input validation for calculation requests.
//!
//! Fail fast: the first problem found is returned and no partial result is built.

use chrono::NaiveDateTime;

use crate::engine::CalculationInput;
use crate::timestamp::parse_timestamp;
use crate::{RiskError, RiskResult};

/// Birth and measurement instants of an input that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedTimes {
    pub birth: NaiveDateTime,
    pub measurement: NaiveDateTime,
}

/// Check required fields and timestamp ordering.
///
/// A TCB of zero (or a non-finite value) and zero gestational weeks are treated as missing,
/// as a blank form field would be.
///
/// # Errors
///
/// Returns `RiskError::MissingField`, `RiskError::InvalidTimestamp` or
/// `RiskError::NonChronological`.
pub fn validate_input(input: &CalculationInput) -> RiskResult<ValidatedTimes> {
    if input.birth_time.trim().is_empty() {
        return Err(RiskError::MissingField("birth_time"));
    }
    if input.measurement_time.trim().is_empty() {
        return Err(RiskError::MissingField("measurement_time"));
    }
    if input.tcb == 0.0 || !input.tcb.is_finite() {
        return Err(RiskError::MissingField("tcb"));
    }
    if input.gestational_weeks == 0 {
        return Err(RiskError::MissingField("gestational_weeks"));
    }

    let birth = parse_timestamp(&input.birth_time).ok_or_else(|| RiskError::InvalidTimestamp {
        field: "birth_time",
        value: input.birth_time.clone(),
    })?;
    let measurement =
        parse_timestamp(&input.measurement_time).ok_or_else(|| RiskError::InvalidTimestamp {
            field: "measurement_time",
            value: input.measurement_time.clone(),
        })?;

    if measurement <= birth {
        return Err(RiskError::NonChronological);
    }

    Ok(ValidatedTimes { birth, measurement })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CalculationInput {
        CalculationInput {
            birth_time: "2024-01-01T10:00".into(),
            measurement_time: "2024-01-02T10:00".into(),
            tcb: 10.0,
            gestational_weeks: 38,
            gestational_days: 0,
            has_risk_factors: false,
        }
    }

    #[test]
    fn test_validate_input_accepts_complete_input() {
        let times = validate_input(&input()).expect("valid input");
        assert!(times.measurement > times.birth);
    }

    #[test]
    fn test_validate_input_rejects_missing_fields() {
        let mut missing = input();
        missing.birth_time = "".into();
        assert_eq!(
            validate_input(&missing),
            Err(RiskError::MissingField("birth_time"))
        );

        let mut missing = input();
        missing.measurement_time = "   ".into();
        assert_eq!(
            validate_input(&missing),
            Err(RiskError::MissingField("measurement_time"))
        );

        let mut missing = input();
        missing.tcb = 0.0;
        assert_eq!(validate_input(&missing), Err(RiskError::MissingField("tcb")));

        let mut missing = input();
        missing.tcb = f64::NAN;
        assert_eq!(validate_input(&missing), Err(RiskError::MissingField("tcb")));

        let mut missing = input();
        missing.gestational_weeks = 0;
        assert_eq!(
            validate_input(&missing),
            Err(RiskError::MissingField("gestational_weeks"))
        );
    }

    #[test]
    fn test_validate_input_rejects_unparseable_timestamp() {
        let mut bad = input();
        bad.measurement_time = "yesterday".into();
        let err = validate_input(&bad).expect_err("should reject text");
        assert!(matches!(
            err,
            RiskError::InvalidTimestamp {
                field: "measurement_time",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_input_rejects_measurement_not_after_birth() {
        let mut same = input();
        same.measurement_time = same.birth_time.clone();
        assert_eq!(validate_input(&same), Err(RiskError::NonChronological));

        let mut before = input();
        before.measurement_time = "2023-12-31 10:00".into();
        assert_eq!(validate_input(&before), Err(RiskError::NonChronological));
    }
}
