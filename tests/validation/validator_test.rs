use aql_builder::query::{ClauseSet, SortDir, Table, TimeClause, TimeUnit};
use aql_builder::validation::{self, Diagnostic, Severity};
use std::num::NonZeroU64;

fn errors(query: &str) -> Vec<String> {
    validation::validate(query)
        .into_iter()
        .filter(Diagnostic::is_error)
        .map(|d| d.message)
        .collect()
}

fn warnings(query: &str) -> Vec<String> {
    validation::validate(query)
        .into_iter()
        .filter(|d| d.severity == Severity::Warning)
        .map(|d| d.message)
        .collect()
}

#[test]
fn test_well_formed_query_has_no_diagnostics() {
    assert!(validation::validate("SELECT * FROM events LAST 1 HOURS").is_empty());
    assert!(validation::validate(
        "SELECT sourceip, COUNT(*) FROM flows WHERE sourceip = '10.0.0.1' \
         GROUP BY sourceip ORDER BY sourceip DESC LIMIT 10 LAST 7 DAYS"
    )
    .is_empty());
}

#[test]
fn test_unknown_table_is_reported_upper_case() {
    let errors = errors("select sourceip from bogus");
    assert_eq!(errors, vec!["Unknown table 'BOGUS'. Use 'events' or 'flows'"]);
}

#[test]
fn test_table_names_are_case_insensitive() {
    assert!(errors("select * from Events last 1 hours").is_empty());
    assert!(errors("SELECT * FROM FLOWS LAST 1 HOURS").is_empty());
}

#[test]
fn test_missing_select_and_from() {
    let errors = errors("sourceip = '1.2.3.4'");
    assert_eq!(
        errors,
        vec!["Query should start with SELECT", "Query is missing FROM clause"]
    );
}

#[test]
fn test_double_equals() {
    let errors = errors("SELECT * FROM events WHERE x == 1");
    assert_eq!(errors, vec!["Use single '=' for equality, not '=='"]);
}

#[test]
fn test_unmatched_quote() {
    let errors = errors("SELECT * FROM events WHERE username = 'admin LAST 1 HOURS");
    assert_eq!(errors, vec!["Unmatched single quotes detected"]);
}

#[test]
fn test_limit_before_order_by() {
    let errors = errors("SELECT * FROM events LIMIT 10 ORDER BY x");
    assert_eq!(errors, vec!["ORDER BY should come before LIMIT"]);
}

#[test]
fn test_last_before_limit() {
    let errors = errors("SELECT * FROM events LAST 1 HOURS LIMIT 10");
    assert_eq!(errors, vec!["LIMIT should come before time clause (LAST)"]);
}

#[test]
fn test_warnings() {
    assert_eq!(
        warnings("SELECT * FROM events WHERE username LIKE 'admin' LAST 1 HOURS"),
        vec!["LIKE clause usually requires % wildcard"]
    );
    assert_eq!(
        warnings("SELECT * FROM events"),
        vec!["Consider adding a time clause (LAST, START/STOP)"]
    );
    assert_eq!(
        warnings("SELECT sourceip FROM events GROUP BY sourceip START '2024-01-01 00:00'"),
        vec!["GROUP BY is typically used with aggregate functions (COUNT, SUM, etc.)"]
    );
}

#[test]
fn test_uniquecount_counts_as_aggregate() {
    assert!(warnings(
        "SELECT username, UNIQUECOUNT(sourceip) FROM events GROUP BY username LAST 7 DAYS"
    )
    .is_empty());
}

#[test]
fn test_keyword_substring_false_positive_preserved() {
    // "LAST" inside a column name still counts as a time clause.
    assert!(warnings("SELECT lastpackettime FROM flows").is_empty());
}

#[test]
fn test_keyword_inside_quoted_literal_preserved() {
    assert_eq!(
        errors("SELECT 'from x' AS a FROM events LAST 1 HOURS"),
        vec!["Unknown table 'X'. Use 'events' or 'flows'"]
    );
    // The literal satisfies the FROM check, so nothing is reported.
    assert!(validation::validate("SELECT * WHERE a = 'from' LAST 1 HOURS").is_empty());
}

#[test]
fn test_report_splits_by_severity() {
    let report = validation::report("SELECT * FROM bogus WHERE a == 1");
    assert!(!report.valid);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(
        report.warnings,
        vec!["Consider adding a time clause (LAST, START/STOP)"]
    );

    let report = validation::report("SELECT * FROM events");
    assert!(report.valid);
    assert!(report.errors.is_empty());
}

#[test]
fn test_assembled_queries_pass() {
    let clauses = ClauseSet::new()
        .select(&["sourceip", "COUNT(*) as hits"])
        .from(Table::Events)
        .filter("magnitude >= 7")
        .group_by(&["sourceip"])
        .order_by(&["hits"], SortDir::Desc)
        .limit(NonZeroU64::new(20).unwrap())
        .time(TimeClause::last(24, TimeUnit::Hours));

    assert!(validation::validate_clauses(&clauses).is_empty());
}
