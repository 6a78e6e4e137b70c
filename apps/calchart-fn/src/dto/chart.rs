//! DTOs for the chart endpoint
//!
//! The handler validates raw JSON itself (each gate has its own error), so the
//! request types below only describe the payload for the OpenAPI document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for the chart endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct ChartRequestDto {
    /// Advisory start of the range, validated but not applied to `data`
    #[schema(example = "2024-01-01")]
    pub start_date: NaiveDate,
    /// Advisory end of the range, validated but not applied to `data`
    #[schema(example = "2024-01-03")]
    pub end_date: NaiveDate,
    /// Measurements in any order; they are sorted by date before plotting
    pub data: Vec<DataPointDto>,
}

/// One calorie measurement
#[derive(Debug, Deserialize, ToSchema)]
pub struct DataPointDto {
    #[schema(example = "2024-01-02")]
    pub date: NaiveDate,
    #[schema(example = 300)]
    pub calories: f64,
}

/// Error response body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Required field 'data' not found")]
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
