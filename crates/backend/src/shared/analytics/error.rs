use thiserror::Error;

/// Parameter validation failures of the aggregation engine.
///
/// All of them are deterministic: retrying with the same input fails again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("unknown time unit '{0}' (expected day, week, month or quarter)")]
    InvalidUnit(String),

    #[error("moving average window {window} is invalid for a series of {len} points")]
    InvalidWindow { window: i64, len: usize },

    #[error("invalid page request: page_size={page_size}, page_number={page_number}")]
    InvalidPage { page_size: i64, page_number: i64 },
}

impl AnalyticsError {
    /// Stable code for API clients
    pub fn code(&self) -> &'static str {
        match self {
            AnalyticsError::InvalidUnit(_) => "INVALID_UNIT",
            AnalyticsError::InvalidWindow { .. } => "INVALID_WINDOW",
            AnalyticsError::InvalidPage { .. } => "INVALID_PAGE",
        }
    }
}
