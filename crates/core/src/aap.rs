//! AAP 2004 phototherapy and exchange-transfusion thresholds (35 weeks or more).

use bili_types::{ThresholdResult, ThresholdStatus, ThresholdValue};
use serde::Serialize;

use crate::constants::AAP_LOWER_RISK_GESTATION_WEEKS;
use crate::interpolation::{interpolate, CurveTable};
use crate::tables::{
    AAP_EXCHANGE_HIGHER, AAP_EXCHANGE_LOWER, AAP_EXCHANGE_MEDIUM, AAP_PHOTOTHERAPY_HIGHER,
    AAP_PHOTOTHERAPY_LOWER, AAP_PHOTOTHERAPY_MEDIUM,
};

/// AAP risk tier, chosen from gestational age and neurotoxicity risk factors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskTier {
    Lower,
    Medium,
    Higher,
}

impl RiskTier {
    fn phototherapy_curve(self) -> &'static CurveTable {
        match self {
            Self::Lower => &AAP_PHOTOTHERAPY_LOWER,
            Self::Medium => &AAP_PHOTOTHERAPY_MEDIUM,
            Self::Higher => &AAP_PHOTOTHERAPY_HIGHER,
        }
    }

    fn exchange_curve(self) -> &'static CurveTable {
        match self {
            Self::Lower => &AAP_EXCHANGE_LOWER,
            Self::Medium => &AAP_EXCHANGE_MEDIUM,
            Self::Higher => &AAP_EXCHANGE_HIGHER,
        }
    }
}

/// Pick the curve tier for an infant of 35 weeks or more.
///
/// | gestation      | no risk factors | risk factors |
/// |----------------|-----------------|--------------|
/// | >= 38 weeks    | lower           | medium       |
/// | 35 to 38 weeks | medium          | higher       |
pub fn select_tier(gestational_weeks: f64, has_risk_factors: bool) -> RiskTier {
    match (gestational_weeks >= AAP_LOWER_RISK_GESTATION_WEEKS, has_risk_factors) {
        (true, false) => RiskTier::Lower,
        (true, true) | (false, false) => RiskTier::Medium,
        (false, true) => RiskTier::Higher,
    }
}

pub fn phototherapy(hours: f64, tcb: f64, tier: RiskTier) -> ThresholdResult {
    compare(tier.phototherapy_curve(), hours, tcb)
}

pub fn exchange_transfusion(hours: f64, tcb: f64, tier: RiskTier) -> ThresholdResult {
    compare(tier.exchange_curve(), hours, tcb)
}

// Threshold boundary is inclusive: a value equal to the threshold is ABOVE.
fn compare(curve: &CurveTable, hours: f64, tcb: f64) -> ThresholdResult {
    let threshold = round_to_hundredths(interpolate(curve, hours));
    let status = if tcb >= threshold {
        ThresholdStatus::Above
    } else {
        ThresholdStatus::Below
    };

    ThresholdResult {
        status,
        threshold: ThresholdValue::Level(threshold),
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_tier_table() {
        assert_eq!(select_tier(38.0, false), RiskTier::Lower);
        assert_eq!(select_tier(40.5, true), RiskTier::Medium);
        assert_eq!(select_tier(37.99, false), RiskTier::Medium);
        assert_eq!(select_tier(35.0, true), RiskTier::Higher);
    }

    #[test]
    fn test_lower_risk_at_24_hours() {
        let photo = phototherapy(24.0, 10.0, RiskTier::Lower);
        assert_eq!(photo.threshold, ThresholdValue::Level(12.0));
        assert_eq!(photo.status, ThresholdStatus::Below);

        let exchange = exchange_transfusion(24.0, 10.0, RiskTier::Lower);
        assert_eq!(exchange.threshold, ThresholdValue::Level(19.0));
        assert_eq!(exchange.status, ThresholdStatus::Below);
    }

    #[test]
    fn test_boundary_is_inclusive() {
        let photo = phototherapy(24.0, 10.0, RiskTier::Medium);
        assert_eq!(photo.threshold, ThresholdValue::Level(10.0));
        assert_eq!(photo.status, ThresholdStatus::Above);
    }

    #[test]
    fn test_threshold_is_rounded_to_two_decimals() {
        // 24h -> 48h on the medium curve rises 10 -> 13; at 25h that is 10.125.
        let photo = phototherapy(25.0, 0.0, RiskTier::Medium);
        assert_eq!(photo.threshold, ThresholdValue::Level(10.13));
    }

    #[test]
    fn test_exchange_interpolates_across_missing_120_hours() {
        // 96h 22.5 -> 168h 22.5 on the medium curve.
        let exchange = exchange_transfusion(120.0, 23.0, RiskTier::Medium);
        assert_eq!(exchange.threshold, ThresholdValue::Level(22.5));
        assert_eq!(exchange.status, ThresholdStatus::Above);

        // 72h 24 -> 96h 25 on the lower curve.
        let exchange = exchange_transfusion(84.0, 20.0, RiskTier::Lower);
        assert_eq!(exchange.threshold, ThresholdValue::Level(24.5));
    }
}
