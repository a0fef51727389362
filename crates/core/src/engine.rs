//! The risk engine: validate, derive hours of life and gestational age, branch to the AAP or
//! Maisels model and assemble the report.

use bili_types::{BhutaniZone, ThresholdResult};
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::constants::AAP_MIN_GESTATION_WEEKS;
use crate::gestation::GestationalAge;
use crate::timestamp::hours_between;
use crate::validation::validate_input;
use crate::{aap, bhutani, maisels, RiskResult};

/// One calculation request, as a form would submit it.
///
/// Every field defaults so that partial records deserialize and are then rejected by
/// validation rather than by the parser.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationInput {
    pub birth_time: String,
    pub measurement_time: String,
    /// Transcutaneous bilirubin, mg/dL.
    pub tcb: f64,
    pub gestational_weeks: u32,
    pub gestational_days: i32,
    pub has_risk_factors: bool,
}

/// The computed report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub dob: String,
    pub tob: String,
    /// Hours of life, rounded to one decimal place.
    pub hol: f64,
    pub tcb: f64,
    pub aog: String,
    pub bhutani_zone: BhutaniZone,
    pub phototherapy: ThresholdResult,
    pub exchange_transfusion: ThresholdResult,
}

/// Pure calculation service. Holds only display configuration.
#[derive(Debug, Clone, Default)]
pub struct RiskEngine {
    config: ReportConfig,
}

impl RiskEngine {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Run a calculation, reporting why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found in `input`.
    pub fn try_calculate(&self, input: &CalculationInput) -> RiskResult<CalculationResult> {
        let times = validate_input(input)?;

        let hours = hours_between(times.birth, times.measurement);
        let gestational_age = GestationalAge::new(input.gestational_weeks, input.gestational_days);
        let weeks = gestational_age.decimal_weeks();
        let tcb = input.tcb;

        let bhutani_zone = bhutani::classify(hours, tcb, weeks);

        let (phototherapy, exchange_transfusion) = if weeks >= AAP_MIN_GESTATION_WEEKS {
            let tier = aap::select_tier(weeks, input.has_risk_factors);
            tracing::debug!(hours, weeks, ?tier, "using AAP curves");
            (
                aap::phototherapy(hours, tcb, tier),
                aap::exchange_transfusion(hours, tcb, tier),
            )
        } else {
            let band = maisels::band_for(weeks);
            tracing::debug!(hours, weeks, band = band.key, "using Maisels bands");
            (
                maisels::phototherapy(tcb, band),
                maisels::exchange_transfusion(tcb, band),
            )
        };

        Ok(CalculationResult {
            dob: times.birth.format(self.config.date_format()).to_string(),
            tob: times.birth.format(self.config.time_format()).to_string(),
            hol: round_to_tenths(hours),
            tcb,
            aog: gestational_age.to_string(),
            bhutani_zone,
            phototherapy,
            exchange_transfusion,
        })
    }

    /// Run a calculation; any validation failure yields `None` and no partial result.
    pub fn calculate(&self, input: &CalculationInput) -> Option<CalculationResult> {
        match self.try_calculate(input) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::debug!(error = %e, "calculation rejected");
                None
            }
        }
    }
}

/// Calculate with the default display configuration.
pub fn calculate_risk(input: &CalculationInput) -> Option<CalculationResult> {
    RiskEngine::default().calculate(input)
}

fn round_to_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RiskError;
    use bili_types::{ThresholdStatus, ThresholdValue};

    fn term_input() -> CalculationInput {
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
    fn test_aap_lower_risk_at_24_hours() {
        let result = calculate_risk(&term_input()).expect("result");

        assert_eq!(result.hol, 24.0);
        assert_eq!(result.aog, "38w 0d");
        assert_eq!(result.dob, "01/01/2024");
        assert_eq!(result.tob, "10:00");
        assert_eq!(result.phototherapy.threshold, ThresholdValue::Level(12.0));
        assert_eq!(result.phototherapy.status, ThresholdStatus::Below);
        assert_eq!(result.exchange_transfusion.threshold, ThresholdValue::Level(19.0));
        assert_eq!(result.exchange_transfusion.status, ThresholdStatus::Below);
        assert_eq!(result.bhutani_zone, BhutaniZone::High);
    }

    #[test]
    fn test_aap_risk_factors_move_to_medium_curve() {
        let input = CalculationInput {
            has_risk_factors: true,
            ..term_input()
        };
        let result = calculate_risk(&input).expect("result");

        assert_eq!(result.phototherapy.threshold, ThresholdValue::Level(10.0));
        assert_eq!(result.phototherapy.status, ThresholdStatus::Above);
        assert_eq!(result.exchange_transfusion.threshold, ThresholdValue::Level(17.0));
    }

    #[test]
    fn test_maisels_for_preterm() {
        let preterm = |tcb| CalculationInput {
            tcb,
            gestational_weeks: 27,
            ..term_input()
        };

        let result = calculate_risk(&preterm(5.5)).expect("result");
        assert_eq!(result.phototherapy.threshold.to_string(), "5-6");
        assert_eq!(result.phototherapy.status, ThresholdStatus::Within);
        assert_eq!(result.exchange_transfusion.threshold.to_string(), "11-14");
        assert_eq!(result.exchange_transfusion.status, ThresholdStatus::Below);
        assert_eq!(result.bhutani_zone, BhutaniZone::NotApplicable);

        let result = calculate_risk(&preterm(4.0)).expect("result");
        assert_eq!(result.phototherapy.status, ThresholdStatus::Below);

        let result = calculate_risk(&preterm(7.0)).expect("result");
        assert_eq!(result.phototherapy.status, ThresholdStatus::Above);
    }

    #[test]
    fn test_days_push_gestation_across_bracket() {
        // 34w 7d is 35.0 weeks: AAP, not Maisels.
        let input = CalculationInput {
            gestational_weeks: 34,
            gestational_days: 7,
            ..term_input()
        };
        let result = calculate_risk(&input).expect("result");
        assert_eq!(result.aog, "34w 7d");
        assert!(matches!(result.phototherapy.threshold, ThresholdValue::Level(_)));
    }

    #[test]
    fn test_timestamp_shapes_give_same_hours() {
        let shapes = ["2024/01/01 - 10:00", "2024-01-01 10:00", "2024-01-01T10:00"];
        let hours: Vec<f64> = shapes
            .iter()
            .map(|birth| {
                let input = CalculationInput {
                    birth_time: (*birth).into(),
                    measurement_time: "2024-01-02 22:15".into(),
                    ..term_input()
                };
                calculate_risk(&input).expect("result").hol
            })
            .collect();

        assert_eq!(hours, vec![36.3, 36.3, 36.3]);
    }

    #[test]
    fn test_invalid_input_returns_none() {
        let empty_birth = CalculationInput {
            birth_time: String::new(),
            ..term_input()
        };
        assert!(calculate_risk(&empty_birth).is_none());

        let same_time = CalculationInput {
            measurement_time: "2024-01-01T10:00".into(),
            ..term_input()
        };
        assert!(calculate_risk(&same_time).is_none());

        let garbage = CalculationInput {
            birth_time: "01 Jan".into(),
            ..term_input()
        };
        assert!(calculate_risk(&garbage).is_none());
    }

    #[test]
    fn test_try_calculate_reports_cause() {
        let engine = RiskEngine::default();
        let earlier = CalculationInput {
            measurement_time: "2024-01-01T09:00".into(),
            ..term_input()
        };
        assert_eq!(
            engine.try_calculate(&earlier),
            Err(RiskError::NonChronological)
        );
    }

    #[test]
    fn test_display_config_does_not_change_quantities() {
        let iso = RiskEngine::new(ReportConfig::new("%Y-%m-%d", "%H:%M:%S").expect("config"));
        let a = iso.calculate(&term_input()).expect("result");
        let b = calculate_risk(&term_input()).expect("result");

        assert_eq!(a.dob, "2024-01-01");
        assert_eq!(a.tob, "10:00:00");
        assert_eq!(a.hol, b.hol);
        assert_eq!(a.phototherapy, b.phototherapy);
        assert_eq!(a.bhutani_zone, b.bhutani_zone);
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let first = serde_json::to_string(&calculate_risk(&term_input())).expect("serialize");
        let second = serde_json::to_string(&calculate_risk(&term_input())).expect("serialize");
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_with_report_keys() {
        let result = calculate_risk(&term_input()).expect("result");
        let value = serde_json::to_value(&result).expect("serialize");

        for key in [
            "dob",
            "tob",
            "aog",
            "hol",
            "tcb",
            "phototherapy",
            "exchangeTransfusion",
            "bhutaniZone",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["phototherapy"]["status"], "BELOW");
        assert_eq!(value["phototherapy"]["threshold"], 12.0);
    }

    #[test]
    fn test_partial_json_input_is_rejected_not_unparseable() {
        let input: CalculationInput =
            serde_json::from_str(r#"{"birthTime":"2024-01-01T10:00"}"#).expect("deserialize");
        assert!(calculate_risk(&input).is_none());
    }
}
