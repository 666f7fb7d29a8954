use super::TimeExample;

const fn ex(clause: &'static str, description: &'static str) -> TimeExample {
    TimeExample {
        clause,
        description,
    }
}

pub static RELATIVE_EXAMPLES: &[TimeExample] = &[
    ex("LAST 5 MINUTES", "Last 5 minutes"),
    ex("LAST 1 HOURS", "Last 1 hour"),
    ex("LAST 24 HOURS", "Last 24 hours"),
    ex("LAST 7 DAYS", "Last 7 days"),
    ex("LAST 30 DAYS", "Last 30 days"),
];

pub static RANGE_EXAMPLES: &[TimeExample] = &[
    ex(
        "START '2024-01-01 00:00' STOP '2024-01-02 00:00'",
        "Specific date range",
    ),
    ex(
        "START '2024-01-01 09:00:00' STOP '2024-01-01 17:00:00'",
        "Specific time range",
    ),
];

pub static PARSEDATETIME_EXAMPLES: &[TimeExample] = &[
    ex(
        "START PARSEDATETIME('1 hour ago') STOP PARSEDATETIME('now')",
        "Dynamic time range",
    ),
    ex("START PARSEDATETIME('1 day ago')", "From 1 day ago to now"),
];
