//! # Repository Layer
//!
//! Read-only catalog repositories over SeaORM connections. Each catalog kind
//! (races, sporting events) plugs its table, columns and seeding into the
//! shared [`CatalogRepository`].

pub mod catalog;
pub mod event;
pub mod race;

pub use catalog::{CatalogKind, CatalogRepository};
pub use event::{EventCatalog, EventRepository};
pub use race::{RaceCatalog, RaceRepository};
