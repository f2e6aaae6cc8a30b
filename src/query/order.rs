//! Order specification compilation.
//!
//! Sort columns cannot be bound as parameters, so each comma-separated token
//! must match `^[A-Za-z0-9_]+( (ASC|DESC))?$` to be copied into the query.
//! Tokens that do not match are dropped without failing the request; if none
//! survive, the catalog's default order applies. Column existence is left to
//! the store, which rejects unknown columns at execution time.

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

fn sort_token_regex() -> &'static Regex {
    static SORT_TOKEN: OnceLock<Regex> = OnceLock::new();
    SORT_TOKEN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_]+( (?:ASC|DESC))?$").expect("sort token pattern is valid")
    })
}

/// Returns true when `token` (already trimmed) may appear in ORDER BY.
pub fn is_valid_sort_token(token: &str) -> bool {
    sort_token_regex().is_match(token)
}

/// Compiles `order_spec` into a complete `ORDER BY …` clause.
///
/// Never fails: `default_order` (for example `advertised_start_time ASC`) is
/// used when `order_spec` is blank or every token is rejected.
pub fn compile_order(order_spec: &str, default_order: &str) -> String {
    let survivors: Vec<&str> = order_spec
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter(|token| {
            let valid = is_valid_sort_token(token);
            if !valid {
                debug!(token_len = token.len(), "dropping invalid sort token");
            }
            valid
        })
        .collect();

    if survivors.is_empty() {
        return format!("ORDER BY {default_order}");
    }

    format!("ORDER BY {}", survivors.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: &str = "advertised_start_time ASC";

    #[test]
    fn blank_spec_uses_default() {
        assert_eq!(compile_order("", DEFAULT), "ORDER BY advertised_start_time ASC");
        assert_eq!(compile_order("   ", DEFAULT), "ORDER BY advertised_start_time ASC");
        assert_eq!(compile_order(" , ,", DEFAULT), "ORDER BY advertised_start_time ASC");
    }

    #[test]
    fn valid_tokens_are_trimmed_and_joined() {
        assert_eq!(
            compile_order(" name ,advertised_start_time DESC", DEFAULT),
            "ORDER BY name, advertised_start_time DESC"
        );
        assert_eq!(compile_order("meeting_id", DEFAULT), "ORDER BY meeting_id");
    }

    #[test]
    fn invalid_tokens_are_dropped() {
        assert_eq!(
            compile_order("name; DROP TABLE races, number DESC", DEFAULT),
            "ORDER BY number DESC"
        );
    }

    #[test]
    fn all_invalid_falls_back_to_default() {
        assert_eq!(
            compile_order("id; DROP TABLE races", DEFAULT),
            "ORDER BY advertised_start_time ASC"
        );
        assert_eq!(
            compile_order("name--, 'x', id DESC 1=1", DEFAULT),
            "ORDER BY advertised_start_time ASC"
        );
    }

    #[test]
    fn direction_is_case_sensitive_and_single_spaced() {
        assert!(is_valid_sort_token("name ASC"));
        assert!(is_valid_sort_token("name DESC"));
        assert!(is_valid_sort_token("meeting_id"));
        assert!(!is_valid_sort_token("name asc"));
        assert!(!is_valid_sort_token("name  DESC"));
        assert!(!is_valid_sort_token("name\tDESC"));
        assert!(!is_valid_sort_token("name DESC\n"));
    }

    #[test]
    fn rejects_injection_shapes() {
        for token in [
            "name/*",
            "name -- comment",
            "\"name\"",
            "name'",
            "(SELECT 1)",
            "name COLLATE NOCASE",
            "name DESC NULLS LAST",
            "races.name",
            "name DESC;",
        ] {
            assert!(!is_valid_sort_token(token), "{token} should be rejected");
        }
    }
}
