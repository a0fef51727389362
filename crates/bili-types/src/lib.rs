//! Shared result vocabulary for the bilirubin risk engine.
//!
//! These types are what a renderer or export formatter consumes: the Bhutani risk zone and the
//! phototherapy / exchange-transfusion threshold outcomes.

use serde::{Deserialize, Serialize};

/// Bhutani nomogram risk zone.
///
/// `NotApplicable` is returned for preterm infants (< 35 weeks) and beyond 144 hours of life,
/// where the nomogram has no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BhutaniZone {
    Low,
    LowIntermediate,
    HighIntermediate,
    High,
    NotApplicable,
}

impl BhutaniZone {
    /// Human-readable label, as shown on the report.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::LowIntermediate => "Low-Intermediate Risk",
            Self::HighIntermediate => "High-Intermediate Risk",
            Self::High => "High Risk",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for BhutaniZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a bilirubin value sits relative to a treatment threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThresholdStatus {
    #[serde(rename = "ABOVE")]
    Above,
    #[serde(rename = "BELOW")]
    Below,
    /// Inside a Maisels range, bounds inclusive.
    #[serde(rename = "WITHIN")]
    Within,
    #[default]
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl ThresholdStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Above => "ABOVE",
            Self::Below => "BELOW",
            Self::Within => "WITHIN",
            Self::NotApplicable => "N/A",
        }
    }
}

impl std::fmt::Display for ThresholdStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A treatment threshold in mg/dL.
///
/// AAP thresholds are a single interpolated level. Maisels thresholds are band-constant ranges
/// and are written as `"min-max"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThresholdValue {
    Level(f64),
    Range { min: f64, max: f64 },
}

impl std::fmt::Display for ThresholdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{}", level),
            Self::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}

impl serde::Serialize for ThresholdValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Level(level) => serializer.serialize_f64(*level),
            Self::Range { .. } => serializer.collect_str(self),
        }
    }
}

/// Outcome of comparing one bilirubin value against one threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdResult {
    pub status: ThresholdStatus,
    pub threshold: ThresholdValue,
}
