//! Calchart Function - Calorie Chart Endpoint
//!
//! Single stateless HTTP endpoint: a JSON series of calorie measurements goes
//! in, a JPEG line chart comes out. This binary plays the part of the function
//! host: it bootstraps logging once, then dispatches every request to the chart
//! handler.

mod bootstrap;
mod config;
mod dto;
mod handlers;
mod routes;

use anyhow::Result;
use calchart_domain::ChartService;
use calchart_plotters::{PlottersRenderer, RenderConfig};
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub chart_service: Arc<ChartService<PlottersRenderer>>,
    /// Send raw internal error text in 500 responses instead of a generic message
    pub expose_internal_errors: bool,
}

impl AppState {
    pub fn new(renderer: PlottersRenderer, expose_internal_errors: bool) -> Self {
        Self {
            chart_service: Arc::new(ChartService::new(renderer)),
            expose_internal_errors,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    // Initialize tracing (once per process)
    bootstrap::init_tracing(config.log_format);

    info!("Starting calchart function");
    if config.expose_internal_errors {
        info!("CHART_EXPOSE_ERRORS is set: internal error text will reach callers");
    }

    let renderer = PlottersRenderer::new(RenderConfig::default());
    let state = AppState::new(renderer, config.expose_internal_errors);

    // Build HTTP router
    let app = routes::create_router(state);

    let addr = config.bind_addr();
    info!(addr = %addr, "Starting HTTP server");

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
