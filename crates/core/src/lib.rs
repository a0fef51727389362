//! # Bili Core
//!
//! Neonatal hyperbilirubinemia risk engine.
//!
//! Given birth and measurement times, a transcutaneous bilirubin value, gestational age and a
//! risk-factor flag, the engine reports:
//! - the Bhutani nomogram risk zone (35 weeks or more, up to 144 hours of life)
//! - AAP phototherapy and exchange-transfusion thresholds (35 weeks or more)
//! - Maisels threshold ranges (below 35 weeks)
//!
//! **No UI concerns**: rendering and colour coding belong to the caller. The engine is pure and
//! holds no mutable state, so one `RiskEngine` can be shared freely across threads.

pub mod aap;
pub mod bhutani;
pub mod config;
pub mod constants;
pub mod engine;
mod error;
pub mod gestation;
pub mod interpolation;
pub mod maisels;
pub mod summary;
pub mod tables;
pub mod timestamp;
pub mod validation;

pub use bili_types::{BhutaniZone, ThresholdResult, ThresholdStatus, ThresholdValue};
pub use config::ReportConfig;
pub use engine::{calculate_risk, CalculationInput, CalculationResult, RiskEngine};
pub use error::{RiskError, RiskResult};
pub use summary::format_summary;
