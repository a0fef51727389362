/// Reasons a calculation produces no result.
///
/// The engine's public contract flattens all of these into an absent result; they are kept
/// distinct so callers and logs can tell them apart.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RiskError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid timestamp for {field}: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("measurement time must be after birth time")]
    NonChronological,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type RiskResult<T> = std::result::Result<T, RiskError>;
