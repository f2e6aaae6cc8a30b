//! # Tests for Handlers
//!
//! Unit tests for the API handlers, called directly with in-memory state.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::handlers::{self, root};
use crate::repositories::{EventRepository, RaceRepository};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use sea_orm::Database;
use serde_json::Value;

async fn test_state(seed_rows: u32) -> AppState {
    let racing_db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());
    let sports_db = Arc::new(Database::connect("sqlite::memory:").await.unwrap());

    let races = Arc::new(RaceRepository::new(racing_db, seed_rows));
    let events = Arc::new(EventRepository::new(sports_db, seed_rows));
    races.init().await.unwrap();
    events.init().await.unwrap();

    AppState::new(Arc::new(AppConfig::default()), races, events)
}

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let Json(service_info) = root().await;

    assert_eq!(service_info.service, "catalog");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_handler_returns_valid_json() {
    let Json(service_info) = root().await;

    let json_value: Value =
        serde_json::to_value(&service_info).expect("Failed to serialize ServiceInfo");

    assert_eq!(json_value["service"], "catalog");
    assert!(json_value.get("version").is_some());
}

#[tokio::test]
async fn test_healthz_reports_both_stores() {
    let state = test_state(0).await;

    let Json(health) = handlers::healthz(State(state)).await.unwrap();

    assert_eq!(health.status, "ok");
    assert_eq!(health.racing, "ok");
    assert_eq!(health.sports, "ok");
}

#[tokio::test]
async fn test_fallback_is_problem_not_found() {
    let response = handlers::fallback().await.into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/problem+json"
    );
}

#[tokio::test]
async fn test_get_race_returns_seeded_row() {
    let state = test_state(3).await;

    let Json(response) = handlers::races::get_race(State(state), Ok(Path(2)))
        .await
        .unwrap();

    assert_eq!(response.race.id, 2);
}

#[tokio::test]
async fn test_get_event_missing_is_not_found() {
    let state = test_state(3).await;

    let err = handlers::events::get_event(State(state), Ok(Path(99)))
        .await
        .unwrap_err();

    assert_eq!(err.status, StatusCode::NOT_FOUND);
    assert_eq!(&*err.code, "NOT_FOUND");
}
