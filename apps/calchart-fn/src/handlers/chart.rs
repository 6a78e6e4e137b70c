//! Chart handler
//!
//! Every request that is not claimed by an operational route lands here. The
//! handler owns the HTTP concerns (CORS, method gate, status codes, headers);
//! validation and rendering belong to `ChartService`.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use calchart_domain::{ChartError, ChartImage};
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::{
    dto::chart::{ChartRequestDto, ErrorResponse},
    AppState,
};

const METHOD_NOT_ALLOWED_MESSAGE: &str = "Only POST requests are accepted";
const INTERNAL_ERROR_MESSAGE: &str = "Internal error while generating chart";

/// Render a calorie chart
#[utoipa::path(
    post,
    path = "/",
    request_body = ChartRequestDto,
    responses(
        (status = 200, description = "Line chart of calories over dates, as image/jpeg"),
        (status = 204, description = "CORS preflight (OPTIONS)"),
        (status = 400, description = "Bad request - missing body, field, bad dates or data", body = ErrorResponse),
        (status = 405, description = "Method not allowed - only POST is accepted", body = ErrorResponse),
        (status = 500, description = "Chart generation failed", body = ErrorResponse)
    ),
    tag = "chart"
)]
#[instrument(skip_all, fields(request_id = %Uuid::now_v7(), method = %method))]
pub async fn chart_handler(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS {
        return preflight_response();
    }

    if method != Method::POST {
        warn!("Rejected non-POST request");
        return error_response(StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE);
    }

    info!(body_len = body.len(), "Received chart request");

    // Validation and rendering are CPU bound.
    let service = Arc::clone(&state.chart_service);
    let result = tokio::task::spawn_blocking(move || service.generate(&body))
        .await
        .unwrap_or_else(|join_err| {
            Err(ChartError::internal_error(format!(
                "chart task did not complete: {join_err}"
            )))
        });

    match result {
        Ok(image) => {
            info!(bytes = image.len(), "Successfully generated chart");
            image_response(image)
        }
        Err(err) => {
            let (status, message) = match &err {
                ChartError::NoPayload
                | ChartError::MissingField(_)
                | ChartError::InvalidDateFormat
                | ChartError::InvalidData
                | ChartError::MissingColumns => {
                    warn!(error = %err, "Rejected chart request");
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                ChartError::InvalidDateValue { .. }
                | ChartError::InvalidCalories { .. }
                | ChartError::RenderFailure(_)
                | ChartError::InternalError(_) => {
                    error!(error = %err, "Failed to generate chart");
                    let message = if state.expose_internal_errors {
                        err.to_string()
                    } else {
                        INTERNAL_ERROR_MESSAGE.to_string()
                    };
                    (StatusCode::INTERNAL_SERVER_ERROR, message)
                }
            };

            error_response(status, message)
        }
    }
}

fn preflight_response() -> Response {
    (
        StatusCode::NO_CONTENT,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::ACCESS_CONTROL_ALLOW_METHODS, "POST"),
            (header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
            (header::ACCESS_CONTROL_MAX_AGE, "3600"),
        ],
    )
        .into_response()
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(ErrorResponse::new(message)),
    )
        .into_response()
}

fn image_response(image: ChartImage) -> Response {
    let content_type = image.content_type();
    (
        StatusCode::OK,
        [
            (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            (header::CONTENT_TYPE, content_type),
        ],
        image.into_bytes(),
    )
        .into_response()
}
