//! Database seeding functionality
//!
//! Dummy data inserted by the catalog repositories' one-time `init`. Rows use
//! ids `1..=count` and are inserted with `INSERT OR IGNORE`, so seeding a
//! database file that already holds them is a no-op.

pub mod event;
pub mod race;

pub use event::seed_events;
pub use race::seed_races;

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

/// Random start time between one day ago and two days from `now`.
pub(crate) fn random_start_time<R: Rng>(rng: &mut R, now: DateTime<Utc>) -> DateTime<Utc> {
    let offset_secs = rng.gen_range(-Duration::days(1).num_seconds()..=Duration::days(2).num_seconds());
    now + Duration::seconds(offset_secs)
}
