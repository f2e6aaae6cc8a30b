//! Race entity model
//!
//! The `races` table entity plus the [`Race`] read model, which carries the
//! derived status computed by the list/get queries.

use chrono::{DateTime, Utc};
use sea_orm::ActiveModelBehavior;
use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Status;

/// Stored race row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "races")]
pub struct Model {
    /// Race identifier (primary key)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,

    /// Meeting the race belongs to
    pub meeting_id: i64,

    /// Official name of the race
    pub name: String,

    /// Race number within its meeting
    pub number: i64,

    /// Whether the race is publicly visible
    pub visible: bool,

    /// Scheduled start of the race
    pub advertised_start_time: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A race as returned by the racing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    /// Race identifier
    pub id: i64,
    /// Meeting the race belongs to
    pub meeting_id: i64,
    /// Official name of the race
    pub name: String,
    /// Race number within its meeting
    pub number: i64,
    /// Whether the race is publicly visible
    pub visible: bool,
    /// Scheduled start of the race
    pub advertised_start_time: DateTime<Utc>,
    /// Derived from the start time when the race was read
    pub status: Status,
}
