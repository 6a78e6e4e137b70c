//! API routes

pub mod chart;

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::chart::{ChartRequestDto, DataPointDto, ErrorResponse},
    handlers, AppState,
};

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::chart::chart_handler,
        health_handler
    ),
    components(
        schemas(ChartRequestDto, DataPointDto, ErrorResponse)
    ),
    tags(
        (name = "chart", description = "Calorie chart rendering"),
        (name = "health", description = "Health check endpoints")
    ),
    info(
        title = "Calchart API",
        version = "0.1.0",
        description = "Stateless function rendering calorie-burn line charts as JPEG"
    )
)]
pub struct ApiDoc;

/// Create the main application router
///
/// The chart handler is the fallback, so it answers on every path and method
/// that the operational routes below do not claim.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", axum::routing::get(health_handler))
        .merge(chart::routes())
        .with_state(state)
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    ),
    tag = "health"
)]
async fn health_handler() -> &'static str {
    "OK"
}
