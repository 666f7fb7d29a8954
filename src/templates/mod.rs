//! Pre-built query templates and placeholder substitution.
//!
//! Templates are plain query text. Values the user must supply appear as
//! `{{NAME}}` placeholders; [`substitute`] fills them in literally.

mod catalog;

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde::Serialize;

pub use catalog::CATEGORIES;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{\{(\w+)\}\}").unwrap());
static RELATIVE_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"LAST \d+ (MINUTES|HOURS|DAYS)").unwrap());

/// Time ranges offered when customizing a template.
pub const TIME_PRESETS: [&str; 4] = ["LAST 1 HOURS", "LAST 24 HOURS", "LAST 7 DAYS", "LAST 30 DAYS"];

/// A pre-built query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub query: &'static str,
    /// Parameters worth customizing (informational).
    pub params: &'static [&'static str],
}

impl Template {
    /// Placeholders in this template's query.
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholders(self.query)
    }

    /// Render with placeholder values and an optional replacement time range.
    pub fn render(&self, values: &HashMap<String, String>, time: Option<&str>) -> String {
        let query = substitute(self.query, values);
        match time {
            Some(clause) if !clause.trim().is_empty() => replace_time_range(&query, clause.trim()),
            _ => query,
        }
    }
}

/// A named group of templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub name: &'static str,
    pub templates: &'static [Template],
}

pub fn categories() -> &'static [Category] {
    CATEGORIES
}

/// Every template with its category name, in catalog order.
pub fn all() -> impl Iterator<Item = (&'static str, &'static Template)> {
    CATEGORIES
        .iter()
        .flat_map(|cat| cat.templates.iter().map(move |t| (cat.name, t)))
}

/// Find a template by name, ignoring case.
pub fn find_by_name(name: &str) -> Option<&'static Template> {
    let name = name.trim();
    all()
        .map(|(_, t)| t)
        .find(|t| t.name.eq_ignore_ascii_case(name))
}

/// Templates whose name or description contains `keyword`, ignoring case.
pub fn search(keyword: &str) -> Vec<(&'static str, &'static Template)> {
    let keyword = keyword.to_lowercase();
    all()
        .filter(|(_, t)| {
            t.name.to_lowercase().contains(&keyword)
                || t.description.to_lowercase().contains(&keyword)
        })
        .collect()
}

/// Placeholder names in `query`, in order of first appearance.
pub fn placeholders(query: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER.captures_iter(query) {
        if let Some(name) = caps.get(1).map(|m| m.as_str()) {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Replace every occurrence of each supplied placeholder.
///
/// Values are inserted literally, without quoting or escaping. Placeholders
/// with no value (or an empty one) are left in place.
pub fn substitute(query: &str, values: &HashMap<String, String>) -> String {
    let mut result = query.to_string();
    for name in placeholders(query) {
        if let Some(value) = values.get(name).filter(|v| !v.is_empty()) {
            result = result.replace(&format!("{{{{{}}}}}", name), value);
        }
    }
    result
}

/// Replace every `LAST <n> <unit>` clause with `clause`.
pub fn replace_time_range(query: &str, clause: &str) -> String {
    RELATIVE_TIME
        .replace_all(query, NoExpand(clause))
        .into_owned()
}
