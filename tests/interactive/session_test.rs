use aql_builder::config::{ClipboardSettings, Settings};
use aql_builder::interactive::Session;
use aql_builder::query::{SortDir, Table};
use std::io::Cursor;

fn settings() -> Settings {
    Settings {
        clipboard: ClipboardSettings {
            enabled: false,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Run a session over `script`, returning the finished session.
fn run_with(script: &str, settings: Settings) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    let input = Cursor::new(script.as_bytes().to_vec());
    let mut session = Session::new(input, Vec::new(), settings);
    session.run().unwrap();
    session
}

fn run(script: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
    run_with(script, settings())
}

fn output(session: Session<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(session.into_output()).unwrap()
}

#[test]
fn test_exit_immediately() {
    let out = output(run("0\n"));
    assert!(out.contains("MAIN MENU"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn test_end_of_input_exits() {
    let out = output(run(""));
    assert!(out.contains("Goodbye!"));
}

#[test]
fn test_invalid_main_choice_reprompts() {
    let out = output(run("x\n0\n"));
    assert!(out.contains("Invalid choice"));
}

#[test]
fn test_build_flows_query() {
    // table=flows, limit 10, LAST 24 HOURS, back, exit
    let session = run("1\n2\n2\n7\n10\n8\n1\n24\n2\nq\n0\n");
    assert_eq!(
        session.clauses().to_aql(),
        "SELECT * FROM flows LIMIT 10 LAST 24 HOURS"
    );
}

#[test]
fn test_invalid_limit_keeps_previous() {
    let session = run("1\n7\n25\n7\nabc\n\nq\n0\n");
    assert_eq!(session.clauses().limit.map(|l| l.get()), Some(25));
    let out = output(session);
    assert!(out.contains("Invalid number: 'abc'"));
}

#[test]
fn test_empty_limit_clears() {
    let session = run("1\n7\n25\n7\n\nq\n0\n");
    assert!(session.clauses().limit.is_none());
}

#[test]
fn test_quick_add_cidr_condition() {
    let session = run("1\n3\n1\n1\n10.0.0.0/8\n\nq\n0\n");
    assert_eq!(
        session.clauses().where_conditions,
        vec!["INCIDR('10.0.0.0/8', sourceip)"]
    );
}

#[test]
fn test_select_group_and_order() {
    // columns, group by, order by with ASC
    let session = run("1\n1\nsourceip, COUNT(*) as hits\n4\nsourceip\n6\nhits\n2\nq\n0\n");
    let clauses = session.clauses();
    assert_eq!(clauses.order_dir, SortDir::Asc);
    assert_eq!(
        clauses.to_aql(),
        "SELECT sourceip, COUNT(*) as hits FROM events GROUP BY sourceip ORDER BY hits ASC"
    );
}

#[test]
fn test_remove_where_condition() {
    let session = run("1\n3\n1\n7\na = 1\n\n3\n1\n7\nb = 2\n\n3\n2\n1\n\nq\n0\n");
    assert_eq!(session.clauses().where_conditions, vec!["b = 2"]);
}

#[test]
fn test_finish_shows_both_forms() {
    let session = run("1\n8\n1\n1\n1\nf\nq\n0\n");
    let out = output(session);
    assert!(out.contains("FINAL QUERY"));
    assert!(out.contains("SELECT *\nFROM events\nLAST 1 MINUTES"));
    assert!(out.contains("SELECT * FROM events LAST 1 MINUTES"));
}

#[test]
fn test_builder_uses_configured_defaults() {
    let mut settings = settings();
    settings.builder.default_table = Table::Flows;
    settings.builder.default_time = Some("LAST 7 DAYS".to_string());

    let session = run_with("1\nq\n0\n", settings);
    assert_eq!(session.clauses().to_aql(), "SELECT * FROM flows LAST 7 DAYS");
}

#[test]
fn test_validate_reports_unknown_table() {
    let out = output(run("8\nselect sourceip from bogus\n\n\n0\n"));
    assert!(out.contains("VALIDATION RESULTS"));
    assert!(out.contains("! error: Unknown table 'BOGUS'"));
    assert!(out.contains("! warning: Consider adding a time clause"));
}

#[test]
fn test_quick_query_joins_lines() {
    let out = output(run("7\nSELECT *\nFROM events\nLAST 1 HOURS\n\n\n0\n"));
    assert!(out.contains("SELECT * FROM events LAST 1 HOURS"));
    assert!(out.contains("Query looks valid!"));
}

#[test]
fn test_whitespace_line_does_not_end_query() {
    let out = output(run("8\nSELECT * FROM events\n   \nLAST 1 HOURS\n\n\n0\n"));
    assert!(out.contains("Query appears to be valid!"));
    assert!(!out.contains("Consider adding a time clause"));
}

#[test]
fn test_modify_template() {
    // templates -> Investigation Queries -> Activity by IP Address -> modify
    let out = output(run("2\n6\n1\nm\n10.0.0.1\n1\n\n0\n0\n0\n"));
    assert!(out.contains("MODIFIED QUERY:"));
    assert!(out.contains("WHERE sourceip = '10.0.0.1'"));
    assert!(out.contains("OR destinationip = '10.0.0.1'"));
    assert!(out.contains("LAST 1 HOURS"));
}

#[test]
fn test_copy_with_clipboard_disabled() {
    let out = output(run("1\nc\n\nq\n0\n"));
    assert!(out.contains("Clipboard integration is disabled"));
    assert!(out.contains("  Query: SELECT * FROM events"));
}

#[test]
fn test_reference_screens() {
    let out = output(run("3\n2\n\n4\n2\n\n5\n\n6\n\n9\n\n0\n"));
    assert!(out.contains("FLOW FIELDS"));
    assert!(out.contains("sourcebytes"));
    assert!(out.contains("AGGREGATION FUNCTIONS"));
    assert!(out.contains("UNIQUECOUNT"));
    assert!(out.contains("LOGICAL OPERATORS"));
    assert!(out.contains("PARSEDATETIME"));
    assert!(out.contains("AQL SYNTAX GUIDE"));
}

#[test]
fn test_no_clear_screen_by_default() {
    let out = output(run("0\n"));
    assert!(!out.contains("\x1b[2J"));

    let input = Cursor::new(b"0\n".to_vec());
    let mut session = Session::new(input, Vec::new(), settings()).with_clear_screen(true);
    session.run().unwrap();
    assert!(output(session).starts_with("\x1b[2J\x1b[H"));
}
