//! Chart service - validate-then-render orchestration
//!
//! The service is the only place where payload validation meets the renderer.
//! It holds no per-request state, so one instance serves every invocation.

use tracing::{debug, info, instrument};

use super::{entity::ChartImage, error::Result, payload::parse_chart_request};
use crate::ports::ChartRenderer;

/// Service turning request bodies into chart images
///
/// Generic over any `ChartRenderer`, so the HTTP layer works with the plotters
/// adapter while tests plug in a mock.
pub struct ChartService<R> {
    renderer: R,
}

impl<R> ChartService<R>
where
    R: ChartRenderer,
{
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Validate a request body and render its series
    ///
    /// Runs synchronously. Callers on an async runtime should move it to a
    /// blocking thread since rendering is CPU bound.
    ///
    /// # Errors
    ///
    /// Any validation error from `parse_chart_request`, or the renderer's
    /// `ChartError::RenderFailure`.
    #[instrument(skip_all, fields(body_len = body.len()))]
    pub fn generate(&self, body: &[u8]) -> Result<ChartImage> {
        let request = parse_chart_request(body)?;

        debug!(
            start_date = %request.start_date(),
            end_date = %request.end_date(),
            "Advisory date range (not applied to data)"
        );

        let series = request.series();
        info!(
            points = series.len(),
            first = ?series.first_date(),
            last = ?series.last_date(),
            "Rendering calorie chart"
        );

        let image = self.renderer.render(series)?;

        info!(bytes = image.len(), "Chart rendered");
        Ok(image)
    }
}
