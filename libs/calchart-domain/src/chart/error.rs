//! Domain errors for chart generation
//!
//! Two classes live here. Client input errors (missing body, missing field, bad
//! date format, bad `data` shape, missing keys) are answered with 400. Everything
//! else, including malformed individual values inside `data`, is an unexpected
//! failure answered with 500.

use thiserror::Error;

/// Errors that can occur while turning a request into a chart
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    /// Body is not JSON, or is an empty/falsy JSON value
    #[error("No JSON data received")]
    NoPayload,

    /// A top-level field is absent
    #[error("Required field '{0}' not found")]
    MissingField(&'static str),

    /// `start_date` or `end_date` is not a `YYYY-MM-DD` date
    #[error("Dates must be in YYYY-MM-DD format")]
    InvalidDateFormat,

    /// `data` is not a list, or the list is empty
    #[error("Data must be a non-empty list")]
    InvalidData,

    /// At least one entry lacks `date` or `calories`
    #[error("Each entry must have 'date' and 'calories'")]
    MissingColumns,

    /// An entry's `date` value does not parse
    #[error("Invalid date value {value} in entry {index}: expected YYYY-MM-DD")]
    InvalidDateValue { index: usize, value: String },

    /// An entry's `calories` value is not a number
    #[error("Invalid calories value {value} in entry {index}: expected a number")]
    InvalidCalories { index: usize, value: String },

    /// The renderer could not draw or encode the chart
    #[error("Chart rendering failed: {0}")]
    RenderFailure(String),

    /// An unexpected internal error occurred
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ChartError {
    /// Create a render failure error with a message
    pub fn render_failure(msg: impl Into<String>) -> Self {
        Self::RenderFailure(msg.into())
    }

    /// Create an internal error with a message
    pub fn internal_error(msg: impl Into<String>) -> Self {
        Self::InternalError(msg.into())
    }

    pub fn invalid_date_value(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidDateValue {
            index,
            value: value.into(),
        }
    }

    pub fn invalid_calories(index: usize, value: impl Into<String>) -> Self {
        Self::InvalidCalories {
            index,
            value: value.into(),
        }
    }

    /// Whether the caller sent something we reject outright (the 400 class)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NoPayload
                | Self::MissingField(_)
                | Self::InvalidDateFormat
                | Self::InvalidData
                | Self::MissingColumns
        )
    }
}

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartError>;
