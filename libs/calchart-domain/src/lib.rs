//! # Calchart Domain Layer
//!
//! Pure business logic for the calorie chart function. It knows how to turn a
//! raw request body into an ordered calorie series, and how to hand that series
//! to a renderer. It does not know about HTTP or about pixels:
//!
//! - **Entities**: `DataPoint`, `CalorieSeries`, `ChartRequest`, `ChartImage`
//! - **Ports**: `ChartRenderer`, implemented by the rendering adapter
//! - **Services**: `ChartService`, the validate-then-render pipeline
//!
//! ## Example
//!
//! ```rust
//! use calchart_domain::chart::parse_chart_request;
//!
//! let body = br#"{"start_date":"2024-01-01","end_date":"2024-01-03",
//!     "data":[{"date":"2024-01-02","calories":300},{"date":"2024-01-01","calories":200}]}"#;
//!
//! let request = parse_chart_request(body).unwrap();
//! assert_eq!(request.series().len(), 2);
//! assert_eq!(request.series().points()[0].calories, 200.0);
//! ```

pub mod chart;
pub mod ports;

// Re-export commonly used types
pub use chart::{
    parse_chart_request, CalorieSeries, ChartError, ChartImage, ChartRequest, ChartService,
    DataPoint,
};
pub use ports::ChartRenderer;
