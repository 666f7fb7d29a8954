//! # AQL Builder
//!
//! Build, browse and sanity-check queries for QRadar's Ariel Query
//! Language (AQL).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────┐   ┌─────────────────────────────┐
//! │  interactive menus / CLI     │   │  HTTP JSON API (web)        │
//! └──────────────────────────────┘   └─────────────────────────────┘
//!                │                                 │
//!                ▼                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  query: ClauseSet ──► query text (fixed clause order)           │
//! │  templates: catalog + {{PLACEHOLDER}} substitution              │
//! └─────────────────────────────────────────────────────────────────┘
//!                                 │
//!                                 ▼
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  validation: pattern-based checks ──► errors / warnings         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `reference` module is static lookup data (fields, functions,
//! operators, time clauses) shared by every front-end. Nothing here talks
//! to a QRadar console.
//!
//! ## Example
//!
//! ```
//! use aql_builder::prelude::*;
//!
//! let query = ClauseSet::new()
//!     .select(&["sourceip", "COUNT(*) as hits"])
//!     .from(Table::Events)
//!     .group_by(&["sourceip"])
//!     .time(TimeClause::last(24, TimeUnit::Hours));
//!
//! assert_eq!(
//!     query.to_aql(),
//!     "SELECT sourceip, COUNT(*) as hits FROM events GROUP BY sourceip LAST 24 HOURS"
//! );
//! assert!(validate(&query.to_aql()).is_empty());
//! ```

pub mod clipboard;
pub mod config;
pub mod interactive;
pub mod query;
pub mod reference;
pub mod templates;
pub mod validation;

#[cfg(feature = "web")]
pub mod web;

/// Commonly used types.
pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::interactive::Session;
    pub use crate::query::{ClauseSet, SortDir, Table, TimeClause, TimeUnit};
    pub use crate::templates::Template;
    pub use crate::validation::{validate, Diagnostic, Severity, ValidationReport};
}
