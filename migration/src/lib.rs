//! Database migrations for the catalog services.
//!
//! This module contains all database migrations using SeaORM Migration.

pub use sea_orm_migration::prelude::*;

mod m2025_11_10_090000_create_races;
mod m2025_11_10_090100_create_events;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m2025_11_10_090000_create_races::Migration),
            Box::new(m2025_11_10_090100_create_events::Migration),
        ]
    }
}
