//! Maisels 2012 preterm threshold bands (below 35 weeks).
//!
//! Bands are constant across hours of life; thresholds are reported as published ranges.

use bili_types::{ThresholdResult, ThresholdStatus, ThresholdValue};

use crate::tables::{LevelRange, MaiselsBand, MAISELS_BANDS};

/// Find the band covering `gestational_weeks`. Bands are half-open below each key.
pub fn band_for(gestational_weeks: f64) -> &'static MaiselsBand {
    MAISELS_BANDS
        .iter()
        .find(|band| band.upper_weeks.map_or(true, |upper| gestational_weeks < upper))
        .unwrap_or(&MAISELS_BANDS[MAISELS_BANDS.len() - 1])
}

pub fn phototherapy(tcb: f64, band: &MaiselsBand) -> ThresholdResult {
    compare(band.phototherapy, tcb)
}

pub fn exchange_transfusion(tcb: f64, band: &MaiselsBand) -> ThresholdResult {
    compare(band.exchange_transfusion, tcb)
}

fn compare(range: LevelRange, tcb: f64) -> ThresholdResult {
    let status = if tcb < range.min {
        ThresholdStatus::Below
    } else if tcb > range.max {
        ThresholdStatus::Above
    } else {
        ThresholdStatus::Within
    };

    ThresholdResult {
        status,
        threshold: ThresholdValue::Range {
            min: range.min,
            max: range.max,
        },
    }
}
