use aql_builder::query::Table;
use aql_builder::reference::{
    self, FieldType, FunctionCategory, OperatorKind, TimeStyle,
};
use insta::assert_snapshot;
use std::collections::HashSet;

#[test]
fn test_field_counts() {
    assert_eq!(reference::fields(Table::Events).len(), 34);
    assert_eq!(reference::fields(Table::Flows).len(), 27);
}

#[test]
fn test_field_names_unique_per_table() {
    for table in Table::ALL {
        let names = reference::field_names(table);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate field in {}", table);
    }
}

#[test]
fn test_table_specific_fields() {
    let payload = reference::field(Table::Events, "payload").unwrap();
    assert_eq!(payload.ty, FieldType::Blob);
    assert!(reference::field(Table::Flows, "payload").is_none());

    let bytes = reference::field(Table::Flows, "sourcebytes").unwrap();
    assert_eq!(bytes.ty, FieldType::Long);
    assert!(reference::field(Table::Events, "sourcebytes").is_none());
}

#[test]
fn test_field_json_shape() {
    let field = reference::field(Table::Events, "sourceip").unwrap();
    let json = serde_json::to_string(field).unwrap();
    assert_snapshot!(json, @r#"{"name":"sourceip","type":"IP","description":"Source IP address"}"#);
}

#[test]
fn test_every_category_has_functions() {
    for category in FunctionCategory::ALL {
        assert!(
            !reference::functions(category).is_empty(),
            "{} is empty",
            category.title()
        );
    }
}

#[test]
fn test_function_lookup() {
    let (category, func) = reference::function("LogSourceName").unwrap();
    assert_eq!(category, FunctionCategory::Retrieval);
    assert_eq!(func.syntax, "LOGSOURCENAME(logsourceid)");

    let (category, _) = reference::function("uniquecount").unwrap();
    assert_eq!(category, FunctionCategory::Aggregation);

    assert!(reference::function("NOPE").is_none());
}

#[test]
fn test_operators() {
    let comparison: Vec<&str> = reference::operators(OperatorKind::Comparison)
        .iter()
        .map(|o| o.op)
        .collect();
    assert!(comparison.contains(&"="));
    assert!(comparison.contains(&"IS NOT NULL"));

    let logical: Vec<&str> = reference::operators(OperatorKind::Logical)
        .iter()
        .map(|o| o.op)
        .collect();
    assert_eq!(logical, vec!["AND", "OR", "NOT"]);

    let json = serde_json::to_string(&reference::operators(OperatorKind::Logical)[0]).unwrap();
    assert_snapshot!(json, @r#"{"op":"AND","desc":"Both conditions must be true"}"#);
}

#[test]
fn test_time_examples() {
    let relative: Vec<&str> = reference::time_examples(TimeStyle::Relative)
        .iter()
        .map(|e| e.clause)
        .collect();
    assert!(relative.contains(&"LAST 24 HOURS"));

    for style in TimeStyle::ALL {
        assert!(!reference::time_examples(style).is_empty(), "{}", style.key());
    }
}
