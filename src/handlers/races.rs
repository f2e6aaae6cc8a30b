//! # Racing API Handlers

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
use crate::services::{GetRaceRequest, GetRaceResponse, ListRacesRequest, ListRacesResponse};

/// Lists races, optionally filtered by meeting and visibility
#[utoipa::path(
    post,
    path = "/v1/list-races",
    request_body = ListRacesRequest,
    responses(
        (status = 200, description = "Matching races", body = ListRacesResponse, example = json!({
            "races": [{
                "id": 2,
                "meetingId": 1,
                "name": "Cox Plate",
                "number": 4,
                "visible": true,
                "advertisedStartTime": "2026-03-02T09:30:00Z",
                "status": "OPEN"
            }]
        })),
        (status = 400, description = "Malformed request body", body = ApiError),
        (status = 500, description = "Query failed", body = ApiError),
        (status = 503, description = "Store unavailable", body = ApiError)
    ),
    tag = "racing"
)]
pub async fn list_races(
    State(state): State<AppState>,
    payload: Result<Json<ListRacesRequest>, JsonRejection>,
) -> Result<Json<ListRacesResponse>, ApiError> {
    let Json(request) = payload?;
    let response = state.racing.list_races(request).await?;
    Ok(Json(response))
}

/// Fetches a single race
#[utoipa::path(
    get,
    path = "/v1/races/{id}",
    params(("id" = i64, Path, description = "Race identifier")),
    responses(
        (status = 200, description = "The race", body = GetRaceResponse),
        (status = 400, description = "Id is not an integer", body = ApiError),
        (status = 404, description = "No race with that id", body = ApiError)
    ),
    tag = "racing"
)]
pub async fn get_race(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<GetRaceResponse>, ApiError> {
    let Path(id) = id.map_err(|rejection| {
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED".to_string(),
            rejection.body_text(),
        )
    })?;

    let response = state.racing.get_race(GetRaceRequest { id }).await?;
    Ok(Json(response))
}
