//! Test utilities for database testing.
//!
//! This module provides utilities for setting up in-memory SQLite databases
//! with migrations applied, plus fixture inserts for both catalogs.

#![allow(dead_code)]

use anyhow::Result;
use catalog::models::{event, race};
use chrono::{DateTime, Utc};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
use std::sync::Arc;

/// Sets up an in-memory SQLite database with all migrations applied.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    // One pooled connection, so every statement sees the same in-memory database
    let db = Database::connect("sqlite::memory:").await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Sets up an in-memory SQLite database with all migrations applied and returns an Arc.
pub async fn setup_test_db_arc() -> Result<Arc<DatabaseConnection>> {
    let db = setup_test_db().await?;
    Ok(Arc::new(db))
}

/// Inserts a race fixture.
pub async fn insert_race(
    db: &DatabaseConnection,
    id: i64,
    meeting_id: i64,
    visible: bool,
    advertised_start_time: DateTime<Utc>,
) -> Result<race::Model> {
    let model = race::ActiveModel {
        id: Set(id),
        meeting_id: Set(meeting_id),
        name: Set(format!("Race {id}")),
        number: Set(id),
        visible: Set(visible),
        advertised_start_time: Set(advertised_start_time),
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Inserts a sporting event fixture.
pub async fn insert_event(
    db: &DatabaseConnection,
    id: i64,
    category_id: i64,
    visible: bool,
    advertised_start_time: DateTime<Utc>,
) -> Result<event::Model> {
    let model = event::ActiveModel {
        id: Set(id),
        name: Set(format!("Event {id}")),
        category_id: Set(category_id),
        division: Set("Premier League".to_string()),
        country: Set("England".to_string()),
        location: Set("London".to_string()),
        advertised_start_time: Set(advertised_start_time),
        visible: Set(visible),
    }
    .insert(db)
    .await?;
    Ok(model)
}
