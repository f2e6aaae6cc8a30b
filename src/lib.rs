//! # Catalog Library
//!
//! Read-only racing and sports catalogs over SQLite: query compilation,
//! repositories, service facades and the HTTP gateway that exposes them.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod services;
pub mod telemetry;
pub use migration;
