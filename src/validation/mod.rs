//! Heuristic validation of AQL query strings.
//!
//! The validator runs a fixed list of independent checks against the raw
//! query text:
//! - The query starts with SELECT
//! - FROM is present and names `events` or `flows`
//! - WHERE clauses don't use `==` and have balanced single quotes
//! - LIKE patterns contain a `%` wildcard (warning)
//! - A time bound (LAST, START, STOP) is present (warning)
//! - ORDER BY precedes LIMIT, and LIMIT precedes LAST
//! - GROUP BY is paired with an aggregate function (warning)
//!
//! Keyword detection is case-insensitive substring search, not tokenization.
//! A keyword inside a string literal or a longer identifier (`'FROM here'`,
//! `lastpackettime`) is still detected. Findings are advisory only.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::query::ClauseSet;

static FROM_TABLE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"FROM\s+(\w+)").unwrap());

const KNOWN_TABLES: [&str; 2] = ["EVENTS", "FLOWS"];
const TIME_KEYWORDS: [&str; 3] = ["LAST", "START", "STOP"];
const AGGREGATES: [&str; 6] = ["COUNT(", "SUM(", "AVG(", "MIN(", "MAX(", "UNIQUECOUNT("];
const GROUP_BY_HINT: &str = "GROUP BY is typically used with aggregate functions";

/// Diagnostic severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The query will almost certainly be rejected.
    Error,
    /// The query is probably not what was intended.
    Warning,
}

/// A single validator finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Diagnostics split by severity, as returned by the HTTP API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut report = ValidationReport::default();
        for diag in diagnostics {
            match diag.severity {
                Severity::Error => report.errors.push(diag.message.clone()),
                Severity::Warning => report.warnings.push(diag.message.clone()),
            }
        }
        report.valid = report.errors.is_empty();
        report
    }
}

/// Validate a raw query string.
///
/// Returns diagnostics in check order. An empty list means nothing looked
/// suspicious; it does not mean the query will run.
///
/// # Example
///
/// ```
/// use aql_builder::validation::validate;
///
/// assert!(validate("SELECT * FROM events LAST 1 HOURS").is_empty());
/// ```
pub fn validate(query: &str) -> Vec<Diagnostic> {
    let mut validator = Validator::new(query);
    validator.run();
    validator.diagnostics
}

/// Like [`validate`], but with the shorter GROUP BY hint the HTTP API reports.
fn validate_terse(query: &str) -> Vec<Diagnostic> {
    let mut validator = Validator::new(query);
    validator.terse = true;
    validator.run();
    validator.diagnostics
}

/// Validate the query a clause set renders to.
pub fn validate_clauses(clauses: &ClauseSet) -> Vec<Diagnostic> {
    validate(&clauses.to_aql())
}

/// Validate and split into a report, as served by `/api/validate`.
///
/// The GROUP BY warning omits the "(COUNT, SUM, etc.)" suffix here.
pub fn report(query: &str) -> ValidationReport {
    ValidationReport::from_diagnostics(&validate_terse(query))
}

struct Validator<'a> {
    /// Original text, for checks on literal characters.
    query: &'a str,
    /// Upper-cased text, for keyword checks.
    upper: String,
    /// Drop the aggregate examples from the GROUP BY hint.
    terse: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Validator<'a> {
    fn new(query: &'a str) -> Self {
        Self {
            query,
            upper: query.to_uppercase(),
            terse: false,
            diagnostics: Vec::new(),
        }
    }

    fn error(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::error(message));
    }

    fn warning(&mut self, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic::warning(message));
    }

    fn has(&self, keyword: &str) -> bool {
        self.upper.contains(keyword)
    }

    /// Byte offset of the first occurrence of each keyword, if both occur.
    fn positions(&self, first: &str, second: &str) -> Option<(usize, usize)> {
        Some((self.upper.find(first)?, self.upper.find(second)?))
    }

    fn run(&mut self) {
        self.check_select();
        self.check_from();
        self.check_where();
        self.check_like();
        self.check_time_bound();
        self.check_order_before_limit();
        self.check_limit_before_last();
        self.check_group_by();
    }

    fn check_select(&mut self) {
        if !self.upper.trim().starts_with("SELECT") {
            self.error("Query should start with SELECT");
        }
    }

    fn check_from(&mut self) {
        if !self.has("FROM") {
            self.error("Query is missing FROM clause");
            return;
        }

        let table = FROM_TABLE
            .captures(&self.upper)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        if let Some(table) = table {
            if !KNOWN_TABLES.contains(&table.as_str()) {
                self.error(format!(
                    "Unknown table '{}'. Use 'events' or 'flows'",
                    table
                ));
            }
        }
    }

    fn check_where(&mut self) {
        if !self.has("WHERE") {
            return;
        }

        if self.query.contains("==") {
            self.error("Use single '=' for equality, not '=='");
        }

        if self.query.matches('\'').count() % 2 != 0 {
            self.error("Unmatched single quotes detected");
        }
    }

    fn check_like(&mut self) {
        if self.has("LIKE") && !self.query.contains('%') {
            self.warning("LIKE clause usually requires % wildcard");
        }
    }

    fn check_time_bound(&mut self) {
        if !TIME_KEYWORDS.iter().any(|kw| self.has(kw)) {
            self.warning("Consider adding a time clause (LAST, START/STOP)");
        }
    }

    fn check_order_before_limit(&mut self) {
        if let Some((limit, order)) = self.positions("LIMIT", "ORDER BY") {
            if limit < order {
                self.error("ORDER BY should come before LIMIT");
            }
        }
    }

    fn check_limit_before_last(&mut self) {
        if let Some((limit, last)) = self.positions("LIMIT", "LAST") {
            if last < limit {
                self.error("LIMIT should come before time clause (LAST)");
            }
        }
    }

    fn check_group_by(&mut self) {
        if self.has("GROUP BY") && !AGGREGATES.iter().any(|agg| self.has(agg)) {
            if self.terse {
                self.warning(GROUP_BY_HINT);
            } else {
                self.warning(format!("{} (COUNT, SUM, etc.)", GROUP_BY_HINT));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(query: &str) -> Vec<String> {
        validate(query).into_iter().map(|d| d.message).collect()
    }

    #[test]
    fn test_clean_query() {
        assert!(validate("SELECT * FROM events LAST 1 HOURS").is_empty());
    }

    #[test]
    fn test_leading_whitespace_allowed() {
        assert!(validate("   select * from flows last 5 minutes").is_empty());
    }

    #[test]
    fn test_missing_from_skips_table_check() {
        let diags = validate("SELECT sourceip LAST 1 HOURS");
        assert_eq!(diags, vec![Diagnostic::error("Query is missing FROM clause")]);
    }

    #[test]
    fn test_from_without_table_word_is_not_flagged() {
        assert!(messages("SELECT * FROM (events) LAST 1 HOURS")
            .iter()
            .all(|m| !m.starts_with("Unknown table")));
    }

    #[test]
    fn test_quotes_only_checked_with_where() {
        assert!(messages("SELECT 'x FROM events LAST 1 HOURS").is_empty());
        assert_eq!(
            messages("SELECT * FROM events WHERE username = 'x LAST 1 HOURS"),
            vec!["Unmatched single quotes detected"]
        );
    }

    #[test]
    fn test_keyword_inside_identifier_is_detected() {
        // "lastpackettime" contains LAST, which satisfies the time-bound check.
        let diags = validate("SELECT lastpackettime FROM flows");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_from_inside_literal_is_checked_as_table() {
        assert_eq!(
            messages("SELECT 'from x' AS a FROM events LAST 1 HOURS"),
            vec!["Unknown table 'X'. Use 'events' or 'flows'"]
        );
    }

    #[test]
    fn test_from_inside_literal_hides_missing_from() {
        assert!(validate("SELECT * WHERE a = 'from' LAST 1 HOURS").is_empty());
    }

    #[test]
    fn test_report_partitions() {
        let report = report("SELECT * FROM events GROUP BY sourceip");
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_report_uses_short_group_by_hint() {
        let query = "SELECT sourceip FROM events GROUP BY sourceip LAST 1 HOURS";
        assert_eq!(
            report(query).warnings,
            vec!["GROUP BY is typically used with aggregate functions"]
        );
        assert_eq!(
            messages(query),
            vec!["GROUP BY is typically used with aggregate functions (COUNT, SUM, etc.)"]
        );
    }

    #[test]
    fn test_diagnostic_display() {
        assert_eq!(
            Diagnostic::warning("be careful").to_string(),
            "warning: be careful"
        );
    }
}
