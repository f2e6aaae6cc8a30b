//! # Query Construction
//!
//! Builds the parameterized SQL executed by the catalog repositories.
//!
//! The WHERE clause is always parameter-bound. The ORDER BY clause is the
//! single place where caller text reaches the query string, so it is
//! restricted to a whitelist token grammar (see [`order`]).

pub mod filter;
pub mod order;
pub mod template;

pub use filter::{CatalogFilter, WhereClause, compile_filter};
pub use order::compile_order;
pub use template::{QueryTemplate, STATUS_EXPR};
