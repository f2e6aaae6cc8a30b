//! Structured filter compilation into a parameter-bound WHERE clause.

use std::collections::HashSet;

use sea_orm::Value;
use serde::{Deserialize, Serialize};

/// Request-scoped listing filter shared by every catalog kind.
///
/// The default value constrains nothing, same as passing no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    /// Keep only rows whose grouping id is one of these; empty means any
    pub grouping_ids: Vec<i64>,
    /// Keep only visible rows when set
    pub visible_only: bool,
}

/// A compiled WHERE fragment and the values bound to its placeholders, in
/// placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhereClause {
    /// Either empty or a complete `WHERE …` fragment
    pub sql: String,
    pub values: Vec<Value>,
}

impl WhereClause {
    pub fn is_empty(&self) -> bool {
        self.sql.is_empty()
    }
}

/// Compiles `filter` against `grouping_column`.
///
/// `grouping_column` is a constant of the catalog kind and is never taken
/// from the request. Ids are always bound, never interpolated.
pub fn compile_filter(filter: Option<&CatalogFilter>, grouping_column: &str) -> WhereClause {
    let Some(filter) = filter else {
        return WhereClause::default();
    };

    let mut clauses = Vec::new();
    let mut values = Vec::with_capacity(filter.grouping_ids.len());

    if !filter.grouping_ids.is_empty() {
        // Each distinct id is bound once, in first-seen order
        let mut seen = HashSet::with_capacity(filter.grouping_ids.len());
        values.extend(
            filter
                .grouping_ids
                .iter()
                .filter(|id| seen.insert(**id))
                .map(|id| Value::from(*id)),
        );
        let placeholders = vec!["?"; values.len()].join(", ");
        clauses.push(format!("{grouping_column} IN ({placeholders})"));
    }

    if filter.visible_only {
        clauses.push("visible = 1".to_string());
    }

    if clauses.is_empty() {
        return WhereClause::default();
    }

    WhereClause {
        sql: format!("WHERE {}", clauses.join(" AND ")),
        values,
    }
}
