use serde::Serialize;

/// Gestational age as entered: whole weeks plus days.
///
/// Days are not clamped to 0..=6; out-of-range values are plain arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GestationalAge {
    pub weeks: u32,
    pub days: i32,
}

impl GestationalAge {
    pub fn new(weeks: u32, days: i32) -> Self {
        Self { weeks, days }
    }

    /// `weeks + days / 7`, used for every guideline bracket decision.
    pub fn decimal_weeks(&self) -> f64 {
        f64::from(self.weeks) + f64::from(self.days) / 7.0
    }
}

impl std::fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}w {}d", self.weeks, self.days)
    }
}
