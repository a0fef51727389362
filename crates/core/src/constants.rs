//! Constants used throughout the bilirubin core crate.
//!
//! Guideline bracket limits live here so the branching in the engine and the tables stay in
//! agreement.

/// Gestational age (weeks) from which the Bhutani nomogram and AAP curves apply.
/// Below this the Maisels preterm bands are used.
pub const AAP_MIN_GESTATION_WEEKS: f64 = 35.0;

/// Gestational age (weeks) from which the AAP lower-risk bracket applies.
pub const AAP_LOWER_RISK_GESTATION_WEEKS: f64 = 38.0;

/// Last hour of life covered by the Bhutani nomogram.
pub const BHUTANI_MAX_HOURS: f64 = 144.0;

/// Default chrono pattern for the date-of-birth display string.
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Default chrono pattern for the time-of-birth display string.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Timestamp shapes accepted after normalisation.
pub const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];
