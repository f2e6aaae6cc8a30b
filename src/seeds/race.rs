//! Race seeding functionality

use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement, TransactionTrait};

use super::random_start_time;
use crate::models::race;

const RACE_NAMES: &[&str] = &[
    "Melbourne Cup",
    "Cox Plate",
    "Golden Slipper",
    "Caulfield Cup",
    "Everest",
    "Doncaster Mile",
    "Blue Diamond Stakes",
    "Magic Millions Classic",
    "Sydney Cup",
    "Newmarket Handicap",
];

/// Generates `count` random races with ids `1..=count`.
pub fn generate_races(count: u32) -> Vec<race::Model> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (1..=i64::from(count))
        .map(|id| race::Model {
            id,
            meeting_id: rng.gen_range(1..=10),
            name: RACE_NAMES
                .choose(&mut rng)
                .copied()
                .unwrap_or("Maiden Plate")
                .to_string(),
            number: rng.gen_range(1..=12),
            visible: rng.gen_bool(0.5),
            advertised_start_time: random_start_time(&mut rng, now),
        })
        .collect()
}

/// Seeds the races table with `count` dummy races in one transaction.
pub async fn seed_races(db: &DatabaseConnection, count: u32) -> Result<(), DbErr> {
    let races = generate_races(count);
    let backend = db.get_database_backend();
    let txn = db.begin().await?;

    for race in races {
        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT OR IGNORE INTO races (id, meeting_id, name, number, visible, advertised_start_time) VALUES (?, ?, ?, ?, ?, ?)",
            [
                race.id.into(),
                race.meeting_id.into(),
                race.name.into(),
                race.number.into(),
                race.visible.into(),
                race.advertised_start_time.into(),
            ],
        ))
        .await?;
    }

    txn.commit().await?;
    log::info!("Race seeding completed ({} rows requested)", count);
    Ok(())
}
