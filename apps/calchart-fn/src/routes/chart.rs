//! Chart routes

use axum::Router;

use crate::{handlers::chart::chart_handler, AppState};

/// Create chart routes: the chart handler answers everything unrouted
pub fn routes() -> Router<AppState> {
    Router::new().fallback(chart_handler)
}
