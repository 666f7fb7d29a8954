use super::Operator;

const fn op(op: &'static str, description: &'static str) -> Operator {
    Operator { op, description }
}

pub static COMPARISON_OPERATORS: &[Operator] = &[
    op("=", "Equal to"),
    op("!=", "Not equal to"),
    op("<>", "Not equal to (alternate)"),
    op("<", "Less than"),
    op(">", "Greater than"),
    op("<=", "Less than or equal to"),
    op(">=", "Greater than or equal to"),
    op(
        "BETWEEN",
        "Between two values. Syntax: field BETWEEN value1 AND value2",
    ),
    op("IN", "In a list of values. Syntax: field IN (value1, value2, ...)"),
    op("IS NULL", "Is null value"),
    op("IS NOT NULL", "Is not null value"),
];

pub static STRING_OPERATORS: &[Operator] = &[
    op(
        "LIKE",
        "Pattern matching (case-sensitive). Wildcards: % (any chars), _ (single char)",
    ),
    op("ILIKE", "Pattern matching (case-insensitive). Same wildcards as LIKE"),
    op("MATCHES", "Regular expression matching (case-sensitive)"),
    op("IMATCHES", "Regular expression matching (case-insensitive)"),
];

pub static LOGICAL_OPERATORS: &[Operator] = &[
    op("AND", "Both conditions must be true"),
    op("OR", "Either condition must be true"),
    op("NOT", "Negates the condition"),
];
