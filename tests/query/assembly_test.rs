use aql_builder::query::{
    conditions, format_query, parse_columns, ClauseSet, SortDir, Table, TimeClause, TimeUnit,
};
use insta::assert_snapshot;
use std::num::NonZeroU64;

fn limit(n: u64) -> NonZeroU64 {
    NonZeroU64::new(n).unwrap()
}

#[test]
fn test_from_only_renders_select_star() {
    for table in Table::ALL {
        let clauses = ClauseSet::new().from(table);
        assert_eq!(clauses.to_aql(), format!("SELECT * FROM {}", table));
    }
}

#[test]
fn test_clause_order_independent_of_set_order() {
    let mut clauses = ClauseSet::new();
    clauses.set_time(TimeClause::last(7, TimeUnit::Days));
    clauses.set_limit(limit(10));
    clauses.set_order_by(&["count"], SortDir::Desc);
    clauses.add_having("COUNT(*) > 5");
    clauses.set_group_by(&["sourceip"]);
    clauses.add_where("magnitude >= 5");
    clauses.set_from(Table::Events);
    clauses.set_select(&["sourceip", "COUNT(*) as count"]);

    assert_snapshot!(
        clauses.to_aql(),
        @"SELECT sourceip, COUNT(*) as count FROM events WHERE magnitude >= 5 GROUP BY sourceip HAVING COUNT(*) > 5 ORDER BY count DESC LIMIT 10 LAST 7 DAYS"
    );
}

#[test]
fn test_multiline_has_one_clause_per_line() {
    let clauses = ClauseSet::new()
        .select(&["sourceip", "destinationip"])
        .from(Table::Flows)
        .filter("sourcebytes > 1000000")
        .filter("destinationport = 443")
        .order_by(&["sourcebytes"], SortDir::Asc)
        .limit(limit(50))
        .time(TimeClause::range("2024-01-01 00:00", Some("2024-01-02 00:00")));

    assert_snapshot!(clauses.to_aql_multiline(), @r"
    SELECT sourceip, destinationip
    FROM flows
    WHERE sourcebytes > 1000000 AND destinationport = 443
    ORDER BY sourcebytes ASC
    LIMIT 50
    START '2024-01-01 00:00' STOP '2024-01-02 00:00'
    ");
}

#[test]
fn test_display_matches_single_line() {
    let clauses = ClauseSet::new()
        .from(Table::Events)
        .filter(&conditions::source_ip("192.168.0.0/16"))
        .time(TimeClause::last(1, TimeUnit::Hours));

    assert_eq!(clauses.to_string(), clauses.to_aql());
    assert_eq!(
        clauses.to_aql(),
        "SELECT * FROM events WHERE INCIDR('192.168.0.0/16', sourceip) LAST 1 HOURS"
    );
}

#[test]
fn test_removing_conditions_keeps_order() {
    let mut clauses = ClauseSet::new();
    clauses.add_where("a = 1");
    clauses.add_where("b = 2");
    clauses.add_where("c = 3");

    assert_eq!(clauses.remove_where(1).unwrap(), "b = 2");
    assert_eq!(clauses.to_aql(), "SELECT * FROM events WHERE a = 1 AND c = 3");
    assert!(clauses.remove_where(5).is_err());
}

#[test]
fn test_invalid_limit_keeps_previous_value() {
    let mut clauses = ClauseSet::new();
    clauses.set_limit(limit(25));

    assert!(clauses.set_limit_str("abc").is_err());
    assert!(clauses.set_limit_str("0").is_err());
    assert!(clauses.set_limit_str("-3").is_err());
    assert_eq!(clauses.limit, Some(limit(25)));

    assert_eq!(clauses.set_limit_str(" 100 ").unwrap(), limit(100));
    assert_eq!(clauses.to_aql(), "SELECT * FROM events LIMIT 100");
}

#[test]
fn test_empty_order_by_omitted() {
    let clauses = ClauseSet::new().order_by::<&str>(&[], SortDir::Asc);
    assert_eq!(clauses.to_aql(), "SELECT * FROM events");
}

#[test]
fn test_parse_columns_trims_and_drops_empty() {
    assert_eq!(
        parse_columns(" sourceip , , username "),
        vec!["sourceip", "username"]
    );
    assert!(parse_columns("*").is_empty());
}

#[test]
fn test_format_query_breaks_before_clauses() {
    let query = "SELECT * FROM events WHERE magnitude > 5 ORDER BY starttime DESC LIMIT 10 LAST 1 HOURS";
    assert_snapshot!(format_query(query), @r"
    SELECT *
    FROM events
    WHERE magnitude > 5
    ORDER BY starttime DESC
    LIMIT 10
    LAST 1 HOURS
    ");
}

#[test]
fn test_quick_conditions() {
    assert_eq!(conditions::destination_ip("10.1.1.1"), "destinationip = '10.1.1.1'");
    assert_eq!(conditions::username("adm%"), "username ILIKE 'adm%'");
    assert_eq!(conditions::magnitude("", ""), "magnitude >= 5");
    assert_eq!(
        conditions::log_source("Windows"),
        "LOGSOURCENAME(logsourceid) ILIKE '%Windows%'"
    );
}
