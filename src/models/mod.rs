//! # Data Models
//!
//! This module contains the stored table entities and the read models returned
//! by the catalog services.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod event;
pub mod race;

pub use event::Event;
pub use race::Race;

/// Lifecycle status derived from the advertised start time at read time.
///
/// Never stored: the list and get queries compute it with a `CASE`
/// expression against the current instant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// Start time has not yet passed
    #[sea_orm(string_value = "OPEN")]
    Open,
    /// Start time is strictly before the moment of the read
    #[sea_orm(string_value = "CLOSED")]
    Closed,
}

impl Status {
    /// Wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Basic service information response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ServiceInfo {
    /// The name of the service
    pub service: String,
    /// The version of the service
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            service: "catalog".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}
