//! Sporting event seeding functionality

use chrono::Utc;
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement, TransactionTrait};

use super::random_start_time;
use crate::models::event;

const EVENT_NAMES: &[&str] = &[
    "Mike Tyson vs Muhammad Ali",
    "Bayern Munich vs Real Madrid - Champions League",
    "USA vs France - FIFA World Cup",
    "Warriors vs San Antonio Spurs - NBA Play Offs",
    "LA Lakers vs Dallas Mavericks - NBA Play Offs",
    "Day 1 - Tour de France",
    "Day 2 - Tour de France",
    "Day 3 - Tour de France",
    "Day 4 - Tour de France",
    "Day 5 - Tour de France",
];

const DIVISIONS: &[&str] = &[
    "Premier League",
    "Paris Olympics",
    "Formula 1",
    "NBA",
    "Champions League",
    "Grand Tour",
];

/// (country, location) pairs
const VENUES: &[(&str, &str)] = &[
    ("England", "London"),
    ("France", "Paris"),
    ("Australia", "Melbourne"),
    ("United States", "Los Angeles"),
    ("Germany", "Munich"),
    ("Japan", "Tokyo"),
];

/// Generates `count` random events with ids `1..=count`.
pub fn generate_events(count: u32) -> Vec<event::Model> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    (1..=i64::from(count))
        .map(|id| {
            let (country, location) = VENUES
                .choose(&mut rng)
                .copied()
                .unwrap_or(("Australia", "Sydney"));

            event::Model {
                id,
                name: EVENT_NAMES
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("Exhibition Match")
                    .to_string(),
                category_id: rng.gen_range(1..=10),
                division: DIVISIONS
                    .choose(&mut rng)
                    .copied()
                    .unwrap_or("Open")
                    .to_string(),
                country: country.to_string(),
                location: location.to_string(),
                advertised_start_time: random_start_time(&mut rng, now),
                visible: rng.gen_bool(0.5),
            }
        })
        .collect()
}

/// Seeds the events table with `count` dummy events in one transaction.
pub async fn seed_events(db: &DatabaseConnection, count: u32) -> Result<(), DbErr> {
    let events = generate_events(count);
    let backend = db.get_database_backend();
    let txn = db.begin().await?;

    for event in events {
        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT OR IGNORE INTO events (id, name, category_id, division, country, location, advertised_start_time, visible) VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            [
                event.id.into(),
                event.name.into(),
                event.category_id.into(),
                event.division.into(),
                event.country.into(),
                event.location.into(),
                event.advertised_start_time.into(),
                event.visible.into(),
            ],
        ))
        .await?;
    }

    txn.commit().await?;
    log::info!("Event seeding completed ({} rows requested)", count);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_events_from_known_venues() {
        let events = generate_events(30);

        assert_eq!(events.len(), 30);
        for event in &events {
            assert!((1..=10).contains(&event.category_id));
            assert!(
                VENUES
                    .iter()
                    .any(|(country, location)| *country == event.country
                        && *location == event.location)
            );
        }
    }
}
