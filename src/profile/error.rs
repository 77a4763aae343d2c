//! Typed failures raised before a profile is generated.

use thiserror::Error;

/// Reasons a profile request is rejected.
///
/// Every variant is produced during validation, before the hourly loop
/// starts, so a caller never receives a partial series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// Year or month does not form a supported calendar month.
    #[error("invalid calendar input: {0}")]
    InvalidCalendar(String),
    /// Negative or non-finite load level or noise percentage.
    #[error("invalid load input: {0}")]
    InvalidLoad(String),
    /// Malformed time of day or unknown weekday name.
    #[error("invalid schedule input: {0}")]
    InvalidSchedule(String),
}
