//! Published reference datasets.
//!
//! Bhutani 1999 hour-specific nomogram, AAP 2004 phototherapy and exchange-transfusion curves
//! for infants of 35 weeks or more, and Maisels 2012 preterm bands. All values are mg/dL and
//! are process-wide constants.

use crate::interpolation::CurvePoint;

const fn p(hours: f64, level: f64) -> CurvePoint {
    CurvePoint::new(hours, level)
}

/// Bhutani 40th percentile: upper edge of the low-risk zone.
pub static BHUTANI_LOW: [CurvePoint; 12] = [
    p(12.0, 4.0),
    p(24.0, 5.0),
    p(36.0, 6.5),
    p(48.0, 8.5),
    p(60.0, 9.6),
    p(72.0, 10.8),
    p(84.0, 11.6),
    p(96.0, 12.3),
    p(108.0, 12.8),
    p(120.0, 13.3),
    p(132.0, 13.4),
    p(144.0, 13.5),
];

/// Bhutani 75th percentile: upper edge of the low-intermediate zone.
pub static BHUTANI_LOW_INTERMEDIATE: [CurvePoint; 12] = [
    p(12.0, 5.0),
    p(24.0, 6.2),
    p(36.0, 8.3),
    p(48.0, 10.8),
    p(60.0, 12.1),
    p(72.0, 13.2),
    p(84.0, 14.0),
    p(96.0, 15.0),
    p(108.0, 15.3),
    p(120.0, 15.5),
    p(132.0, 15.6),
    p(144.0, 15.7),
];

/// Bhutani 95th percentile: upper edge of the high-intermediate zone.
pub static BHUTANI_HIGH_INTERMEDIATE: [CurvePoint; 12] = [
    p(12.0, 7.1),
    p(24.0, 8.0),
    p(36.0, 11.0),
    p(48.0, 13.2),
    p(60.0, 15.0),
    p(72.0, 16.0),
    p(84.0, 16.8),
    p(96.0, 17.5),
    p(108.0, 17.5),
    p(120.0, 17.5),
    p(132.0, 17.5),
    p(144.0, 17.5),
];

/// AAP phototherapy, lower risk (>= 38 weeks, well).
pub static AAP_PHOTOTHERAPY_LOWER: [CurvePoint; 7] = [
    p(0.0, 5.0),
    p(24.0, 12.0),
    p(48.0, 15.0),
    p(72.0, 18.0),
    p(96.0, 20.0),
    p(120.0, 21.0),
    p(168.0, 21.0),
];

/// AAP phototherapy, medium risk.
pub static AAP_PHOTOTHERAPY_MEDIUM: [CurvePoint; 7] = [
    p(0.0, 4.0),
    p(24.0, 10.0),
    p(48.0, 13.0),
    p(72.0, 15.0),
    p(96.0, 17.0),
    p(120.0, 18.0),
    p(168.0, 18.0),
];

/// AAP phototherapy, higher risk.
pub static AAP_PHOTOTHERAPY_HIGHER: [CurvePoint; 7] = [
    p(0.0, 3.0),
    p(24.0, 8.0),
    p(48.0, 11.0),
    p(72.0, 13.0),
    p(96.0, 14.0),
    p(120.0, 15.0),
    p(168.0, 15.0),
];

/// AAP exchange transfusion, lower risk. No 120 h checkpoint is published for this family.
pub static AAP_EXCHANGE_LOWER: [CurvePoint; 6] = [
    p(0.0, 16.0),
    p(24.0, 19.0),
    p(48.0, 22.0),
    p(72.0, 24.0),
    p(96.0, 25.0),
    p(168.0, 25.0),
];

/// AAP exchange transfusion, medium risk.
pub static AAP_EXCHANGE_MEDIUM: [CurvePoint; 6] = [
    p(0.0, 14.0),
    p(24.0, 17.0),
    p(48.0, 19.0),
    p(72.0, 21.0),
    p(96.0, 22.5),
    p(168.0, 22.5),
];

/// AAP exchange transfusion, higher risk.
pub static AAP_EXCHANGE_HIGHER: [CurvePoint; 6] = [
    p(0.0, 12.0),
    p(24.0, 15.0),
    p(48.0, 17.0),
    p(72.0, 18.5),
    p(96.0, 19.0),
    p(168.0, 19.0),
];

/// Inclusive bilirubin range in mg/dL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelRange {
    pub min: f64,
    pub max: f64,
}

/// One Maisels preterm band: applies to gestational ages below `upper_weeks`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaiselsBand {
    /// Published band key, e.g. `"28"` for < 28 0/7 weeks.
    pub key: &'static str,
    /// Exclusive upper bound in decimal weeks; `None` for the open-ended last band.
    pub upper_weeks: Option<f64>,
    pub phototherapy: LevelRange,
    pub exchange_transfusion: LevelRange,
}

const fn band(
    key: &'static str,
    upper_weeks: Option<f64>,
    phototherapy: (f64, f64),
    exchange_transfusion: (f64, f64),
) -> MaiselsBand {
    MaiselsBand {
        key,
        upper_weeks,
        phototherapy: LevelRange {
            min: phototherapy.0,
            max: phototherapy.1,
        },
        exchange_transfusion: LevelRange {
            min: exchange_transfusion.0,
            max: exchange_transfusion.1,
        },
    }
}

/// Maisels bands ordered by ascending gestational age.
pub static MAISELS_BANDS: [MaiselsBand; 5] = [
    band("28", Some(28.0), (5.0, 6.0), (11.0, 14.0)),
    band("29", Some(30.0), (6.0, 8.0), (12.0, 14.0)),
    band("31", Some(32.0), (8.0, 10.0), (13.0, 16.0)),
    band("33", Some(34.0), (10.0, 12.0), (15.0, 18.0)),
    band("34", None, (12.0, 14.0), (17.0, 19.0)),
];

/// Every interpolated curve with a name, for diagnostics and listing.
pub fn named_curves() -> [(&'static str, &'static [CurvePoint]); 9] {
    [
        ("bhutani_low", &BHUTANI_LOW),
        ("bhutani_low_intermediate", &BHUTANI_LOW_INTERMEDIATE),
        ("bhutani_high_intermediate", &BHUTANI_HIGH_INTERMEDIATE),
        ("aap_phototherapy_lower", &AAP_PHOTOTHERAPY_LOWER),
        ("aap_phototherapy_medium", &AAP_PHOTOTHERAPY_MEDIUM),
        ("aap_phototherapy_higher", &AAP_PHOTOTHERAPY_HIGHER),
        ("aap_exchange_lower", &AAP_EXCHANGE_LOWER),
        ("aap_exchange_medium", &AAP_EXCHANGE_MEDIUM),
        ("aap_exchange_higher", &AAP_EXCHANGE_HIGHER),
    ]
}
