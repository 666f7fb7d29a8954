//! Reference catalog for AQL: fields, functions, operators and time clauses.
//!
//! Everything here is static lookup data; the only logic is case handling in
//! the lookups.

mod fields;
mod functions;
mod operators;
mod time;

use serde::Serialize;

use crate::query::Table;

pub use fields::{EVENT_FIELDS, EVENT_FIELD_GROUPS, FLOW_FIELDS, FLOW_FIELD_GROUPS};
pub use functions::{
    AGGREGATION_FUNCTIONS, CALCULATION_FUNCTIONS, FILTER_FUNCTIONS, GEOGRAPHIC_FUNCTIONS,
    REFERENCE_DATA_FUNCTIONS, RETRIEVAL_FUNCTIONS,
};
pub use operators::{COMPARISON_OPERATORS, LOGICAL_OPERATORS, STRING_OPERATORS};
pub use time::{PARSEDATETIME_EXAMPLES, RANGE_EXAMPLES, RELATIVE_EXAMPLES};

// =============================================================================
// Fields
// =============================================================================

/// Data type of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldType {
    #[serde(rename = "INTEGER")]
    Integer,
    #[serde(rename = "LONG")]
    Long,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "IP")]
    Ip,
    #[serde(rename = "IPv6")]
    Ipv6,
    #[serde(rename = "TIMESTAMP")]
    Timestamp,
    #[serde(rename = "BLOB")]
    Blob,
    #[serde(rename = "BOOLEAN")]
    Boolean,
}

impl FieldType {
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Integer => "INTEGER",
            FieldType::Long => "LONG",
            FieldType::String => "STRING",
            FieldType::Ip => "IP",
            FieldType::Ipv6 => "IPv6",
            FieldType::Timestamp => "TIMESTAMP",
            FieldType::Blob => "BLOB",
            FieldType::Boolean => "BOOLEAN",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // pad() so width specifiers work in table output
        f.pad(self.as_str())
    }
}

/// A column of the `events` or `flows` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub ty: FieldType,
    pub description: &'static str,
}

/// A display heading and the field names listed under it.
pub type FieldGroup = (&'static str, &'static [&'static str]);

/// All fields of a table, in catalog order.
pub fn fields(table: Table) -> &'static [Field] {
    match table {
        Table::Events => EVENT_FIELDS,
        Table::Flows => FLOW_FIELDS,
    }
}

/// Field names of a table, in catalog order.
pub fn field_names(table: Table) -> Vec<&'static str> {
    fields(table).iter().map(|f| f.name).collect()
}

/// Look up a field by exact name. Field names are case-sensitive in AQL.
pub fn field(table: Table, name: &str) -> Option<&'static Field> {
    fields(table).iter().find(|f| f.name == name)
}

/// Display groupings for a table's fields.
pub fn field_groups(table: Table) -> &'static [FieldGroup] {
    match table {
        Table::Events => EVENT_FIELD_GROUPS,
        Table::Flows => FLOW_FIELD_GROUPS,
    }
}

// =============================================================================
// Functions
// =============================================================================

/// Function categories, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionCategory {
    Calculation,
    Aggregation,
    Retrieval,
    Geographic,
    ReferenceData,
    Filter,
}

impl FunctionCategory {
    pub const ALL: [FunctionCategory; 6] = [
        FunctionCategory::Calculation,
        FunctionCategory::Aggregation,
        FunctionCategory::Retrieval,
        FunctionCategory::Geographic,
        FunctionCategory::ReferenceData,
        FunctionCategory::Filter,
    ];

    pub fn title(self) -> &'static str {
        match self {
            FunctionCategory::Calculation => "Calculation & Formatting",
            FunctionCategory::Aggregation => "Aggregation",
            FunctionCategory::Retrieval => "Data Retrieval",
            FunctionCategory::Geographic => "Geographic",
            FunctionCategory::ReferenceData => "Reference Data",
            FunctionCategory::Filter => "Filter",
        }
    }
}

/// A built-in AQL function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Function {
    pub name: &'static str,
    pub syntax: &'static str,
    pub description: &'static str,
}

pub fn functions(category: FunctionCategory) -> &'static [Function] {
    match category {
        FunctionCategory::Calculation => CALCULATION_FUNCTIONS,
        FunctionCategory::Aggregation => AGGREGATION_FUNCTIONS,
        FunctionCategory::Retrieval => RETRIEVAL_FUNCTIONS,
        FunctionCategory::Geographic => GEOGRAPHIC_FUNCTIONS,
        FunctionCategory::ReferenceData => REFERENCE_DATA_FUNCTIONS,
        FunctionCategory::Filter => FILTER_FUNCTIONS,
    }
}

/// Every function with its category, in display order.
pub fn all_functions() -> impl Iterator<Item = (FunctionCategory, &'static Function)> {
    FunctionCategory::ALL
        .into_iter()
        .flat_map(|cat| functions(cat).iter().map(move |f| (cat, f)))
}

/// Look up a function by name, ignoring case.
pub fn function(name: &str) -> Option<(FunctionCategory, &'static Function)> {
    all_functions().find(|(_, f)| f.name.eq_ignore_ascii_case(name.trim()))
}

// =============================================================================
// Operators
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Comparison,
    String,
    Logical,
}

impl OperatorKind {
    pub const ALL: [OperatorKind; 3] = [
        OperatorKind::Comparison,
        OperatorKind::String,
        OperatorKind::Logical,
    ];

    /// Lower-case key used in JSON output.
    pub fn key(self) -> &'static str {
        match self {
            OperatorKind::Comparison => "comparison",
            OperatorKind::String => "string",
            OperatorKind::Logical => "logical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Operator {
    pub op: &'static str,
    #[serde(rename = "desc")]
    pub description: &'static str,
}

pub fn operators(kind: OperatorKind) -> &'static [Operator] {
    match kind {
        OperatorKind::Comparison => COMPARISON_OPERATORS,
        OperatorKind::String => STRING_OPERATORS,
        OperatorKind::Logical => LOGICAL_OPERATORS,
    }
}

// =============================================================================
// Time clauses
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeStyle {
    /// `LAST <n> <unit>`
    Relative,
    /// `START '<datetime>' STOP '<datetime>'`
    Range,
    /// `START PARSEDATETIME('...')`
    ParseDateTime,
}

impl TimeStyle {
    pub const ALL: [TimeStyle; 3] = [TimeStyle::Relative, TimeStyle::Range, TimeStyle::ParseDateTime];

    pub fn key(self) -> &'static str {
        match self {
            TimeStyle::Relative => "LAST",
            TimeStyle::Range => "START/STOP",
            TimeStyle::ParseDateTime => "PARSEDATETIME",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeExample {
    pub clause: &'static str,
    pub description: &'static str,
}

pub fn time_examples(style: TimeStyle) -> &'static [TimeExample] {
    match style {
        TimeStyle::Relative => RELATIVE_EXAMPLES,
        TimeStyle::Range => RANGE_EXAMPLES,
        TimeStyle::ParseDateTime => PARSEDATETIME_EXAMPLES,
    }
}
