use aql_builder::templates::{self, TIME_PRESETS};
use aql_builder::validation;
use std::collections::HashMap;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_catalog_shape() {
    let categories = templates::categories();
    let names: Vec<&str> = categories.iter().map(|c| c.name).collect();
    assert_eq!(
        names,
        vec![
            "Authentication & Access",
            "Network & Traffic",
            "Threat Detection",
            "System Monitoring",
            "Windows Events",
            "Investigation Queries",
        ]
    );
    assert_eq!(templates::all().count(), 26);
    assert!(categories.iter().all(|c| !c.templates.is_empty()));
}

#[test]
fn test_template_names_unique() {
    let mut names: Vec<String> = templates::all()
        .map(|(_, t)| t.name.to_lowercase())
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 26);
}

#[test]
fn test_every_template_has_no_validation_errors() {
    for (category, template) in templates::all() {
        let query = template.query.split_whitespace().collect::<Vec<_>>().join(" ");
        let report = validation::report(&query);
        assert!(
            report.valid,
            "{} / {}: {:?}",
            category, template.name, report.errors
        );
    }
}

#[test]
fn test_find_by_name_ignores_case() {
    let template = templates::find_by_name("activity by ip address").unwrap();
    assert_eq!(template.name, "Activity by IP Address");
    assert!(templates::find_by_name("No Such Template").is_none());
}

#[test]
fn test_search_matches_name_or_description() {
    let results = templates::search("LOGIN");
    assert!(!results.is_empty());
    assert!(results.iter().all(|(_, t)| {
        t.name.to_lowercase().contains("login") || t.description.to_lowercase().contains("login")
    }));
    assert!(templates::search("zzzz-not-a-keyword").is_empty());
}

#[test]
fn test_repeated_placeholder_replaced_everywhere() {
    let template = templates::find_by_name("Activity by IP Address").unwrap();
    assert_eq!(template.placeholders(), vec!["IP_ADDRESS"]);

    let query = template.render(&values(&[("IP_ADDRESS", "10.0.0.1")]), None);
    assert_eq!(query.matches("'10.0.0.1'").count(), 2);
    assert!(!query.contains("{{IP_ADDRESS}}"));
}

#[test]
fn test_blank_value_keeps_placeholder() {
    let template = templates::find_by_name("Activity by IP Address").unwrap();
    let query = template.render(&values(&[("IP_ADDRESS", "")]), None);
    assert_eq!(query, template.query);
}

#[test]
fn test_render_replaces_time_range() {
    let template = templates::find_by_name("Activity by IP Address").unwrap();
    assert!(template.query.ends_with("LAST 7 DAYS"));

    let query = template.render(&HashMap::new(), Some(TIME_PRESETS[0]));
    assert!(query.ends_with("LAST 1 HOURS"));

    let query = template.render(
        &HashMap::new(),
        Some("START '2024-01-01 00:00' STOP '2024-01-02 00:00'"),
    );
    assert!(query.ends_with("START '2024-01-01 00:00' STOP '2024-01-02 00:00'"));
    assert!(!query.contains("LAST 7 DAYS"));
}

#[test]
fn test_two_placeholders() {
    let template = templates::find_by_name("Connections Between Two IPs").unwrap();
    let query = template.render(
        &values(&[("SOURCE_IP", "10.0.0.1"), ("DEST_IP", "10.0.0.2")]),
        None,
    );
    assert!(query.contains("(sourceip = '10.0.0.1' AND destinationip = '10.0.0.2')"));
    assert!(query.contains("(sourceip = '10.0.0.2' AND destinationip = '10.0.0.1')"));
    assert!(templates::placeholders(&query).is_empty());
}
