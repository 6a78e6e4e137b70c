//! Ports (trait definitions) for external dependencies
//!
//! The domain decides what a renderer must do; the plotters adapter decides how.

use crate::chart::{CalorieSeries, ChartError, ChartImage};

/// Port for chart rendering
///
/// Implementations receive a series already sorted ascending by date and must
/// return a fully encoded image. Every call must use its own drawing context and
/// release it before returning, on success and on failure, so that nothing leaks
/// between requests and concurrent calls never share drawing state.
///
/// Rendering is CPU bound, so the method is synchronous. Async callers move it
/// to a blocking thread.
pub trait ChartRenderer: Send + Sync {
    /// Render a line chart of calories over dates
    ///
    /// # Errors
    ///
    /// Returns `ChartError::RenderFailure` if drawing or encoding fails
    fn render(&self, series: &CalorieSeries) -> Result<ChartImage, ChartError>;
}
