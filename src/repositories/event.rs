//! Sporting event catalog

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use super::catalog::{CatalogKind, CatalogRepository};
use crate::models::Event;
use crate::query::QueryTemplate;
use crate::seeds;

/// The `events` table, grouped by category.
#[derive(Debug, Clone, Copy)]
pub struct EventCatalog;

#[async_trait]
impl CatalogKind for EventCatalog {
    type Item = Event;

    const KIND: &'static str = "event";
    const TEMPLATE: QueryTemplate = QueryTemplate::new(
        "events",
        &[
            "id",
            "name",
            "category_id",
            "division",
            "country",
            "location",
            "advertised_start_time",
            "visible",
        ],
    );
    const GROUPING_COLUMN: &'static str = "category_id";
    const DEFAULT_ORDER: &'static str = "advertised_start_time ASC";

    async fn seed(db: &DatabaseConnection, rows: u32) -> Result<(), DbErr> {
        seeds::seed_events(db, rows).await
    }
}

pub type EventRepository = CatalogRepository<EventCatalog>;
