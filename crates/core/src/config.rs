//! Report display configuration.
//!
//! Display patterns are resolved once at process startup and passed into the engine, so that
//! calculations never read process-wide environment variables.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDateTime;

use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_TIME_FORMAT};
use crate::{RiskError, RiskResult};

/// Chrono patterns used for the date-of-birth and time-of-birth display strings.
///
/// Display formatting never affects computed quantities.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    date_format: String,
    time_format: String,
}

impl ReportConfig {
    /// Create a new `ReportConfig`, rejecting empty or unparseable patterns.
    pub fn new(date_format: impl Into<String>, time_format: impl Into<String>) -> RiskResult<Self> {
        let date_format = date_format.into();
        let time_format = time_format.into();

        validate_format("date_format", &date_format)?;
        validate_format("time_format", &time_format)?;

        Ok(Self {
            date_format,
            time_format,
        })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn time_format(&self) -> &str {
        &self.time_format
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.into(),
            time_format: DEFAULT_TIME_FORMAT.into(),
        }
    }
}

fn validate_format(name: &str, pattern: &str) -> RiskResult<()> {
    if pattern.trim().is_empty() {
        return Err(RiskError::InvalidConfig(format!("{} cannot be empty", name)));
    }

    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(RiskError::InvalidConfig(format!(
            "{} is not a valid chrono pattern: {:?}",
            name, pattern
        )));
    }

    // Offset items such as %z parse fine but cannot render a zone-less timestamp.
    let mut rendered = String::new();
    if write!(rendered, "{}", NaiveDateTime::default().format(pattern)).is_err() {
        return Err(RiskError::InvalidConfig(format!(
            "{} cannot be rendered for a birth timestamp: {:?}",
            name, pattern
        )));
    }

    Ok(())
}

/// Build a `ReportConfig` from optional environment values.
///
/// `None` or empty/whitespace values fall back to the defaults.
pub fn report_config_from_env_values(
    date_format: Option<String>,
    time_format: Option<String>,
) -> RiskResult<ReportConfig> {
    fn non_empty(value: Option<String>) -> Option<String> {
        value.filter(|v| !v.trim().is_empty())
    }

    ReportConfig::new(
        non_empty(date_format).unwrap_or_else(|| DEFAULT_DATE_FORMAT.into()),
        non_empty(time_format).unwrap_or_else(|| DEFAULT_TIME_FORMAT.into()),
    )
}
