//! Bhutani hour-specific nomogram zones for infants of 35 weeks or more.

use bili_types::BhutaniZone;

use crate::constants::{AAP_MIN_GESTATION_WEEKS, BHUTANI_MAX_HOURS};
use crate::interpolation::interpolate;
use crate::tables::{BHUTANI_HIGH_INTERMEDIATE, BHUTANI_LOW, BHUTANI_LOW_INTERMEDIATE};

/// Classify `tcb` at `hours` of life.
///
/// Zone edges use strict `>`: a value exactly on a percentile curve falls in the lower zone.
pub fn classify(hours: f64, tcb: f64, gestational_weeks: f64) -> BhutaniZone {
    if gestational_weeks < AAP_MIN_GESTATION_WEEKS || hours > BHUTANI_MAX_HOURS {
        return BhutaniZone::NotApplicable;
    }

    if tcb > interpolate(&BHUTANI_HIGH_INTERMEDIATE, hours) {
        BhutaniZone::High
    } else if tcb > interpolate(&BHUTANI_LOW_INTERMEDIATE, hours) {
        BhutaniZone::HighIntermediate
    } else if tcb > interpolate(&BHUTANI_LOW, hours) {
        BhutaniZone::LowIntermediate
    } else {
        BhutaniZone::Low
    }
}
