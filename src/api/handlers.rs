//! HTTP request handlers for the Rota Generation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::scheduling::generate_schedule;

use super::request::ScheduleGenerationRequest;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/schedule", post(schedule_handler))
        .with_state(state)
}

/// Handler for POST /schedule endpoint.
///
/// Accepts a schedule generation request and returns the generated
/// schedule summary.
async fn schedule_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScheduleGenerationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing schedule generation request");

    let body = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => ApiError::new(
                    "MISSING_CONTENT_TYPE",
                    "Content-Type must be application/json",
                ),
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let config = state.config().config();
    match generate_schedule(
        &body.request,
        &body.staff,
        &body.job_roles,
        &body.thresholds,
        &body.shift_rules,
        config,
    ) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                schedule_id = %summary.schedule_id,
                shifts = summary.shifts.len(),
                total_cost = %summary.total_cost,
                cost_percentage = %summary.cost_percentage,
                "Schedule generated"
            );
            (StatusCode::OK, Json(summary)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Schedule generation failed"
            );
            let response: ApiErrorResponse = err.into();
            response.into_response()
        }
    }
}
