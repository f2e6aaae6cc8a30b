//! Static SQL templates for the catalog tables.

use super::filter::WhereClause;

/// Derives `OPEN`/`CLOSED` from the advertised start time.
///
/// Both sides go through `julianday` so RFC 3339 text (`T` separator, offset
/// suffix, fractional seconds) is compared as an instant rather than as a
/// string. `'now'` is fixed for the duration of one statement.
pub const STATUS_EXPR: &str = "CASE \
    WHEN julianday(advertised_start_time) < julianday('now') THEN 'CLOSED' \
    ELSE 'OPEN' \
END";

/// List and get-by-id templates for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    table: &'static str,
    columns: &'static [&'static str],
}

impl QueryTemplate {
    /// `columns` are the stored columns in scan order; the derived `status`
    /// column is always appended last.
    pub const fn new(table: &'static str, columns: &'static [&'static str]) -> Self {
        Self { table, columns }
    }

    /// Base `SELECT … FROM <table>` shared by every query.
    pub fn select(&self) -> String {
        format!(
            "SELECT {}, {} AS status FROM {}",
            self.columns.join(", "),
            STATUS_EXPR,
            self.table
        )
    }

    /// Full list query: base select, optional WHERE fragment, ORDER BY clause.
    pub fn list(&self, where_clause: &WhereClause, order_by: &str) -> String {
        let mut sql = self.select();
        if !where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&where_clause.sql);
        }
        sql.push(' ');
        sql.push_str(order_by);
        sql
    }

    /// Single-row query with the id bound as the only parameter.
    pub fn get_by_id(&self) -> String {
        format!("{} WHERE id = ?", self.select())
    }
}
