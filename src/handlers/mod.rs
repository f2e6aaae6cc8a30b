//! # API Handlers
//!
//! HTTP endpoint handlers for the racing and sports catalog gateway.

pub mod events;
pub mod races;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::db;
use crate::error::{ApiError, ErrorType};
use crate::models::ServiceInfo;
use crate::server::AppState;

/// Root handler that returns basic service information
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service information", body = ServiceInfo)
    ),
    tag = "root"
)]
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Health status of both catalog stores
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub racing: String,
    pub sports: String,
}

/// Liveness check that pings the racing and sports stores
#[utoipa::path(
    get,
    path = "/healthz",
    responses(
        (status = 200, description = "Both stores reachable", body = HealthResponse),
        (status = 503, description = "A store is unreachable", body = ApiError)
    ),
    tag = "root"
)]
pub async fn healthz(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    let (racing, sports) = tokio::join!(
        db::health_check(&state.racing_db),
        db::health_check(&state.sports_db)
    );

    if let Err(err) = racing.as_ref().and(sports.as_ref()) {
        tracing::warn!(error = %err, "health check failed");
        return Err(ErrorType::ServiceUnavailable.into());
    }

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        racing: "ok".to_string(),
        sports: "ok".to_string(),
    }))
}

/// Problem response for unmatched routes
pub async fn fallback() -> ApiError {
    ErrorType::NotFound.into()
}

/// Replaces the timeout layer's empty 408 with a problem response.
///
/// Handlers never answer 408 themselves, so a bodiless 408 can only come from
/// the request deadline firing; the handler future has already been dropped.
pub async fn problem_on_timeout(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT
        && !response.headers().contains_key(header::CONTENT_TYPE)
    {
        tracing::warn!("request deadline exceeded");
        return ApiError::from(ErrorType::RequestTimeout).into_response();
    }
    response
}

#[cfg(test)]
mod tests;
