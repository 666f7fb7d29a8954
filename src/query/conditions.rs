//! Ready-made WHERE conditions for the common filters.

/// Default operator for the magnitude filter.
pub const DEFAULT_MAGNITUDE_OP: &str = ">=";
/// Default value for the magnitude filter.
pub const DEFAULT_MAGNITUDE: &str = "5";

/// Match `field` against an IP address, or a CIDR range when the input
/// contains a `/`.
pub fn ip_match(field: &str, input: &str) -> String {
    let input = input.trim();
    if input.contains('/') {
        format!("INCIDR('{}', {})", input, field)
    } else {
        format!("{} = '{}'", field, input)
    }
}

pub fn source_ip(input: &str) -> String {
    ip_match("sourceip", input)
}

pub fn destination_ip(input: &str) -> String {
    ip_match("destinationip", input)
}

/// Exact username match, or case-insensitive pattern when `%` is present.
pub fn username(input: &str) -> String {
    let input = input.trim();
    if input.contains('%') {
        format!("username ILIKE '{}'", input)
    } else {
        format!("username = '{}'", input)
    }
}

/// `magnitude <op> <value>`; blank operator and value fall back to `>= 5`.
pub fn magnitude(op: &str, value: &str) -> String {
    let op = non_blank(op).unwrap_or(DEFAULT_MAGNITUDE_OP);
    let value = non_blank(value).unwrap_or(DEFAULT_MAGNITUDE);
    format!("magnitude {} {}", op, value)
}

pub fn log_source(pattern: &str) -> String {
    format!("LOGSOURCENAME(logsourceid) ILIKE '%{}%'", pattern.trim())
}

pub fn event_name(pattern: &str) -> String {
    format!("QIDNAME(qid) ILIKE '%{}%'", pattern.trim())
}

fn non_blank(s: &str) -> Option<&str> {
    let s = s.trim();
    (!s.is_empty()).then_some(s)
}
