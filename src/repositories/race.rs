//! Race catalog

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr};

use super::catalog::{CatalogKind, CatalogRepository};
use crate::models::Race;
use crate::query::QueryTemplate;
use crate::seeds;

/// The `races` table, grouped by meeting.
#[derive(Debug, Clone, Copy)]
pub struct RaceCatalog;

#[async_trait]
impl CatalogKind for RaceCatalog {
    type Item = Race;

    const KIND: &'static str = "race";
    const TEMPLATE: QueryTemplate = QueryTemplate::new(
        "races",
        &[
            "id",
            "meeting_id",
            "name",
            "number",
            "visible",
            "advertised_start_time",
        ],
    );
    const GROUPING_COLUMN: &'static str = "meeting_id";
    const DEFAULT_ORDER: &'static str = "advertised_start_time ASC";

    async fn seed(db: &DatabaseConnection, rows: u32) -> Result<(), DbErr> {
        seeds::seed_races(db, rows).await
    }
}

pub type RaceRepository = CatalogRepository<RaceCatalog>;
