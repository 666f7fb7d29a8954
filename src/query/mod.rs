//! Clause assembler - build AQL query strings from structured clause values.
//!
//! A [`ClauseSet`] holds the in-progress values of every top-level clause.
//! Rendering is a pure function of those values and always emits clauses in
//! the order AQL expects:
//!
//! ```text
//! SELECT ... FROM ... WHERE ... GROUP BY ... HAVING ... ORDER BY ... LIMIT ... <time>
//! ```

pub mod conditions;

use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors raised when user-supplied clause values are malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClauseError {
    #[error("Invalid number: '{0}'")]
    InvalidLimit(String),

    #[error("LIMIT must be a positive integer")]
    ZeroLimit,

    #[error("Unknown table '{0}'. Use 'events' or 'flows'")]
    UnknownTable(String),

    #[error("Invalid sort direction '{0}'. Use ASC or DESC")]
    InvalidSortDir(String),

    #[error("Invalid time unit '{0}'. Use MINUTES, HOURS or DAYS")]
    InvalidTimeUnit(String),

    #[error("No condition #{index} (there are {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

// =============================================================================
// Table
// =============================================================================

/// The tables an AQL query can read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Table {
    /// Security events from log sources.
    #[default]
    Events,
    /// Network flow data.
    Flows,
}

impl Table {
    pub const ALL: [Table; 2] = [Table::Events, Table::Flows];

    pub fn as_str(self) -> &'static str {
        match self {
            Table::Events => "events",
            Table::Flows => "flows",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Table::Events => "Security events from log sources",
            Table::Flows => "Network flow data",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Table {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "events" => Ok(Table::Events),
            "flows" => Ok(Table::Flows),
            _ => Err(ClauseError::UnknownTable(s.trim().to_string())),
        }
    }
}

// =============================================================================
// ORDER BY direction
// =============================================================================

/// Sort direction. Defaults to descending, which is what most SIEM
/// investigations want (newest / largest first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDir {
    #[serde(rename = "ASC", alias = "asc")]
    Asc,
    #[default]
    #[serde(rename = "DESC", alias = "desc")]
    Desc,
}

impl SortDir {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDir::Asc => "ASC",
            SortDir::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDir {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ASC" => Ok(SortDir::Asc),
            "DESC" => Ok(SortDir::Desc),
            _ => Err(ClauseError::InvalidSortDir(s.trim().to_string())),
        }
    }
}

// =============================================================================
// Time clause
// =============================================================================

/// Unit for a relative `LAST` clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeUnit::Minutes => "MINUTES",
            TimeUnit::Hours => "HOURS",
            TimeUnit::Days => "DAYS",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = ClauseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "MINUTE" | "MINUTES" => Ok(TimeUnit::Minutes),
            "HOUR" | "HOURS" => Ok(TimeUnit::Hours),
            "DAY" | "DAYS" => Ok(TimeUnit::Days),
            _ => Err(ClauseError::InvalidTimeUnit(s.trim().to_string())),
        }
    }
}

/// The trailing time bound of a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeClause {
    /// `LAST <amount> <unit>`
    Last { amount: u32, unit: TimeUnit },
    /// `START '<start>' [STOP '<stop>']`
    Range { start: String, stop: Option<String> },
    /// A clause supplied verbatim by the caller.
    Raw(String),
}

impl TimeClause {
    pub fn last(amount: u32, unit: TimeUnit) -> Self {
        TimeClause::Last { amount, unit }
    }

    pub fn range(start: &str, stop: Option<&str>) -> Self {
        TimeClause::Range {
            start: start.into(),
            stop: stop.map(String::from),
        }
    }

    pub fn raw(clause: &str) -> Self {
        TimeClause::Raw(clause.into())
    }
}

impl fmt::Display for TimeClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeClause::Last { amount, unit } => write!(f, "LAST {} {}", amount, unit),
            TimeClause::Range { start, stop: None } => write!(f, "START '{}'", start),
            TimeClause::Range {
                start,
                stop: Some(stop),
            } => write!(f, "START '{}' STOP '{}'", start, stop),
            TimeClause::Raw(clause) => f.write_str(clause),
        }
    }
}

// =============================================================================
// Clause set
// =============================================================================

/// The clause values of a query under construction.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use = "ClauseSet has no effect until rendered with to_aql()"]
pub struct ClauseSet {
    /// SELECT columns. Empty means `*`.
    pub select: Vec<String>,
    pub from: Table,
    pub where_conditions: Vec<String>,
    pub group_by: Vec<String>,
    pub having: Vec<String>,
    pub order_by: Vec<String>,
    pub order_dir: SortDir,
    pub limit: Option<NonZeroU64>,
    pub time: Option<TimeClause>,
}

impl ClauseSet {
    /// Create an empty clause set (`SELECT * FROM events`).
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Fluent construction
    // =========================================================================

    pub fn select<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.set_select(columns);
        self
    }

    pub fn from(mut self, table: Table) -> Self {
        self.from = table;
        self
    }

    /// Add a WHERE condition (ANDed with existing conditions).
    pub fn filter(mut self, condition: &str) -> Self {
        self.add_where(condition);
        self
    }

    pub fn group_by<S: AsRef<str>>(mut self, columns: &[S]) -> Self {
        self.set_group_by(columns);
        self
    }

    /// Add a HAVING condition (ANDed with existing conditions).
    pub fn having(mut self, condition: &str) -> Self {
        self.add_having(condition);
        self
    }

    pub fn order_by<S: AsRef<str>>(mut self, columns: &[S], dir: SortDir) -> Self {
        self.set_order_by(columns, dir);
        self
    }

    pub fn limit(mut self, limit: NonZeroU64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn time(mut self, time: TimeClause) -> Self {
        self.time = Some(time);
        self
    }

    // =========================================================================
    // In-place editing (used by the interactive builder)
    // =========================================================================

    /// Replace the SELECT list. `*` entries are dropped since an empty list
    /// already renders as `SELECT *`.
    pub fn set_select<S: AsRef<str>>(&mut self, columns: &[S]) {
        self.select = clean_columns(columns);
    }

    pub fn set_from(&mut self, table: Table) {
        self.from = table;
    }

    /// Append a WHERE condition. Blank conditions are ignored.
    pub fn add_where(&mut self, condition: &str) {
        push_condition(&mut self.where_conditions, condition);
    }

    /// Remove the WHERE condition at `index` (zero-based).
    pub fn remove_where(&mut self, index: usize) -> Result<String, ClauseError> {
        remove_condition(&mut self.where_conditions, index)
    }

    pub fn clear_where(&mut self) {
        self.where_conditions.clear();
    }

    pub fn set_group_by<S: AsRef<str>>(&mut self, columns: &[S]) {
        self.group_by = clean_columns(columns);
    }

    /// Append a HAVING condition. Blank conditions are ignored.
    pub fn add_having(&mut self, condition: &str) {
        push_condition(&mut self.having, condition);
    }

    /// Remove the HAVING condition at `index` (zero-based).
    pub fn remove_having(&mut self, index: usize) -> Result<String, ClauseError> {
        remove_condition(&mut self.having, index)
    }

    pub fn clear_having(&mut self) {
        self.having.clear();
    }

    pub fn set_order_by<S: AsRef<str>>(&mut self, columns: &[S], dir: SortDir) {
        self.order_by = clean_columns(columns);
        self.order_dir = dir;
    }

    pub fn set_limit(&mut self, limit: NonZeroU64) {
        self.limit = Some(limit);
    }

    /// Parse and set LIMIT from user input.
    ///
    /// On error the current limit is left untouched.
    pub fn set_limit_str(&mut self, input: &str) -> Result<NonZeroU64, ClauseError> {
        let input = input.trim();
        let value: u64 = input
            .parse()
            .map_err(|_| ClauseError::InvalidLimit(input.to_string()))?;
        let limit = NonZeroU64::new(value).ok_or(ClauseError::ZeroLimit)?;
        self.limit = Some(limit);
        Ok(limit)
    }

    pub fn clear_limit(&mut self) {
        self.limit = None;
    }

    pub fn set_time(&mut self, time: TimeClause) {
        self.time = Some(time);
    }

    pub fn clear_time(&mut self) {
        self.time = None;
    }

    /// Reset every clause, keeping `from` as the table to start over with.
    pub fn reset(&mut self, from: Table) {
        *self = ClauseSet {
            from,
            ..Default::default()
        };
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render each non-empty clause, in AQL clause order.
    pub fn clauses(&self) -> Vec<String> {
        let mut parts = Vec::with_capacity(8);

        if self.select.is_empty() {
            parts.push("SELECT *".to_string());
        } else {
            parts.push(format!("SELECT {}", self.select.join(", ")));
        }

        parts.push(format!("FROM {}", self.from));

        if !self.where_conditions.is_empty() {
            parts.push(format!("WHERE {}", self.where_conditions.join(" AND ")));
        }

        if !self.group_by.is_empty() {
            parts.push(format!("GROUP BY {}", self.group_by.join(", ")));
        }

        if !self.having.is_empty() {
            parts.push(format!("HAVING {}", self.having.join(" AND ")));
        }

        if !self.order_by.is_empty() {
            parts.push(format!(
                "ORDER BY {} {}",
                self.order_by.join(", "),
                self.order_dir
            ));
        }

        if let Some(limit) = self.limit {
            parts.push(format!("LIMIT {}", limit));
        }

        if let Some(time) = &self.time {
            parts.push(time.to_string());
        }

        parts
    }

    /// Render as a single-line query.
    pub fn to_aql(&self) -> String {
        self.clauses().join(" ")
    }

    /// Render with one clause per line.
    pub fn to_aql_multiline(&self) -> String {
        self.clauses().join("\n")
    }
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_aql())
    }
}

/// Split comma-separated column input.
///
/// A lone `*` yields an empty list, meaning "all columns".
pub fn parse_columns(input: &str) -> Vec<String> {
    let columns: Vec<&str> = input.split(',').collect();
    clean_columns(&columns)
}

/// Break a single-line query before each major clause for display.
///
/// Matching is on upper-case keywords surrounded by spaces, so lower-case
/// input is returned unchanged.
pub fn format_query(query: &str) -> String {
    const BREAK_BEFORE: [&str; 8] = [
        "FROM", "WHERE", "GROUP BY", "HAVING", "ORDER BY", "LIMIT", "LAST", "START",
    ];

    let mut formatted = query.to_string();
    for keyword in BREAK_BEFORE {
        formatted = formatted.replace(&format!(" {} ", keyword), &format!("\n{} ", keyword));
    }
    formatted
}

fn clean_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    columns
        .iter()
        .map(|c| c.as_ref().trim())
        .filter(|c| !c.is_empty() && *c != "*")
        .map(String::from)
        .collect()
}

fn push_condition(conditions: &mut Vec<String>, condition: &str) {
    let condition = condition.trim();
    if !condition.is_empty() {
        conditions.push(condition.to_string());
    }
}

fn remove_condition(conditions: &mut Vec<String>, index: usize) -> Result<String, ClauseError> {
    if index >= conditions.len() {
        return Err(ClauseError::IndexOutOfRange {
            index: index + 1,
            len: conditions.len(),
        });
    }
    Ok(conditions.remove(index))
}

// =============================================================================
// Tests
// =============================================================================
