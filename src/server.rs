//! # Server Configuration
//!
//! Router construction, shared state, and the serve loop for the catalog
//! gateway.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::StatusCode,
    middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::AppConfig;
use crate::db;
use crate::handlers;
use crate::repositories::{EventRepository, RaceRepository};
use crate::services::{Racing, RacingService, Sports, SportsService};
use crate::telemetry;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub racing: Arc<dyn Racing>,
    pub sports: Arc<dyn Sports>,
    pub racing_db: Arc<DatabaseConnection>,
    pub sports_db: Arc<DatabaseConnection>,
}

impl AppState {
    /// Wires the services over already-initialized repositories.
    pub fn new(
        config: Arc<AppConfig>,
        races: Arc<RaceRepository>,
        events: Arc<EventRepository>,
    ) -> Self {
        let racing_db = Arc::new(races.connection().clone());
        let sports_db = Arc::new(events.connection().clone());

        Self {
            config,
            racing: Arc::new(RacingService::new(races)),
            sports: Arc::new(SportsService::new(events)),
            racing_db,
            sports_db,
        }
    }
}

/// Creates and configures the Axum application router
pub fn create_app(state: AppState) -> Router {
    let request_timeout = state.config.request_timeout();

    Router::new()
        .route("/", get(handlers::root))
        .route("/healthz", get(handlers::healthz))
        .route("/v1/list-races", post(handlers::races::list_races))
        .route("/v1/races/{id}", get(handlers::races::get_race))
        .route("/v1/list-events", post(handlers::events::list_events))
        .route("/v1/events/{id}", get(handlers::events::get_event))
        .fallback(handlers::fallback)
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(middleware::map_response(handlers::problem_on_timeout))
        .layer(middleware::from_fn(telemetry::propagate_trace_id))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Opens both stores, runs the one-time catalog bootstrap and serves until
/// Ctrl-C.
pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let config = Arc::new(config);

    let addr = config.bind_addr().context("invalid server address")?;

    let racing_db = Arc::new(db::init_pool(&config, &config.racing_database_url).await?);
    let sports_db = Arc::new(db::init_pool(&config, &config.sports_database_url).await?);

    let races = Arc::new(RaceRepository::new(racing_db, config.seed_row_count));
    let events = Arc::new(EventRepository::new(sports_db, config.seed_row_count));

    races.init().await.context("racing catalog init failed")?;
    events.init().await.context("sports catalog init failed")?;

    let app = create_app(AppState::new(Arc::clone(&config), races, events));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for shutdown signal");
        }
        tracing::info!("shutdown signal received");
        signal_token.cancel();
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!(%addr, profile = %config.profile, "catalog server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    tracing::info!("catalog server stopped");
    Ok(())
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz,
        crate::handlers::races::list_races,
        crate::handlers::races::get_race,
        crate::handlers::events::list_events,
        crate::handlers::events::get_event,
    ),
    components(
        schemas(
            crate::models::ServiceInfo,
            crate::models::Status,
            crate::models::Race,
            crate::models::Event,
            crate::handlers::HealthResponse,
            crate::services::ListRacesRequest,
            crate::services::ListRacesRequestFilter,
            crate::services::ListRacesResponse,
            crate::services::GetRaceResponse,
            crate::services::ListEventsRequest,
            crate::services::ListEventsRequestFilter,
            crate::services::ListEventsResponse,
            crate::services::GetEventResponse,
            crate::error::ApiError,
        )
    ),
    tags(
        (name = "racing", description = "Horse, harness and greyhound races"),
        (name = "sports", description = "Sporting events"),
    ),
    info(
        title = "Catalog API",
        description = "Read-only racing and sports catalogs",
        version = env!("CARGO_PKG_VERSION"),
    )
)]
pub struct ApiDoc;
