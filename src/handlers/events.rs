//! # Sports API Handlers

use axum::{
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::Json,
};

use crate::error::ApiError;
use crate::server::AppState;
use crate::services::{GetEventRequest, GetEventResponse, ListEventsRequest, ListEventsResponse};

/// Lists sporting events, optionally filtered by category and visibility
#[utoipa::path(
    post,
    path = "/v1/list-events",
    request_body = ListEventsRequest,
    responses(
        (status = 200, description = "Matching events", body = ListEventsResponse),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Query failed", body = ApiError),
        (status = 503, description = "Store unavailable", body = ApiError)
    ),
    tag = "sports"
)]
pub async fn list_events(
    State(state): State<AppState>,
    payload: Result<Json<ListEventsRequest>, JsonRejection>,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.sports.list_events(request).await?;
    Ok(Json(response))
}

/// Fetches a single sporting event
#[utoipa::path(
    get,
    path = "/v1/events/{id}",
    params(("id" = i64, Path, description = "Event identifier")),
    responses(
        (status = 200, description = "The event", body = GetEventResponse),
        (status = 400, description = "Id is not an integer", body = ApiError),
        (status = 404, description = "No event with that id", body = ApiError)
    ),
    tag = "sports"
)]
pub async fn get_event(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GetEventResponse>, ApiError> {
    let Path(id) = id.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED".to_string(),
            rejection.body_text(),
        )
    })?;

    let response = state.sports.get_event(GetEventRequest { id }).await?;
    Ok(Json(response))
}
