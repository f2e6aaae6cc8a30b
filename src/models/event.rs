//! Sporting event entity model

use chrono::{DateTime, Utc};
use sea_orm::ActiveModelBehavior;
use sea_orm::FromQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Status;

/// Stored sporting event row
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i64,
    pub name: String,
    /// Sport category (grouping id)
    pub category_id: i64,
    pub division: String,
    pub country: String,
    pub location: String,
    pub advertised_start_time: DateTimeUtc,
    pub visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// A sporting event as returned by the sports service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub division: String,
    pub country: String,
    pub location: String,
    pub advertised_start_time: DateTime<Utc>,
    pub status: Status,
    pub visible: bool,
}
