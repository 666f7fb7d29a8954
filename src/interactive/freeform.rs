//! Free-form query entry, validation and the syntax guide.

use std::io::{self, BufRead, Write};

use super::Session;
use crate::validation;

const QUICK_REFERENCE: &str = "
Enter your AQL query directly. Press Enter twice to finish.

QUICK REFERENCE:
  SELECT * FROM events WHERE <condition> LAST <time>
  SELECT * FROM flows WHERE <condition> LAST <time>

COMMON FIELDS:
  events: sourceip, destinationip, username, magnitude, payload, qid
  flows:  sourceip, destinationip, sourcebytes, destinationbytes

COMMON FUNCTIONS:
  LOGSOURCENAME(logsourceid), QIDNAME(qid), CATEGORYNAME(category)
  COUNT(*), SUM(), AVG(), DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm')

OPERATORS:
  = != < > <= >=  |  LIKE ILIKE MATCHES IMATCHES  |  AND OR NOT
  IN (val1, val2)  |  BETWEEN x AND y  |  IS NULL  |  IS NOT NULL

TIME:
  LAST 1 HOURS  |  LAST 24 HOURS  |  LAST 7 DAYS
  START '2024-01-01 00:00' STOP '2024-01-02 00:00'
";

const SYNTAX_GUIDE: &str = "
BASIC QUERY STRUCTURE:
  SELECT <columns>
  FROM <table>
  [WHERE <conditions>]
  [GROUP BY <columns>]
  [HAVING <conditions>]
  [ORDER BY <columns> [ASC|DESC]]
  [LIMIT <number>]
  [LAST <time> | START '<datetime>' STOP '<datetime>']

TABLES:
  - events    : Security events
  - flows     : Network flow data

EXAMPLES:
  1. Simple query:
     SELECT * FROM events LAST 1 HOURS

  2. Filter by IP:
     SELECT sourceip, destinationip, username
     FROM events
     WHERE sourceip = '192.168.1.1'
     LAST 24 HOURS

  3. Aggregation:
     SELECT sourceip, COUNT(*) as count
     FROM events
     GROUP BY sourceip
     ORDER BY count DESC
     LIMIT 10
     LAST 7 DAYS

  4. Using functions:
     SELECT LOGSOURCENAME(logsourceid), QIDNAME(qid), sourceip
     FROM events
     WHERE magnitude > 5
     LAST 1 HOURS

TIPS:
  - Use single quotes for strings: WHERE username = 'admin'
  - Use double quotes for column aliases: AS \"My Column\"
  - Field names are case-sensitive
  - Keywords (SELECT, FROM, etc.) are NOT case-sensitive
  - Use ILIKE for case-insensitive matching
  - Use IMATCHES for case-insensitive regex
";

impl<R: BufRead, W: Write> Session<R, W> {
    /// Read lines until an empty line or end of input, joined with spaces.
    ///
    /// A line holding only whitespace does not end input.
    fn read_multiline(&mut self) -> io::Result<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line.is_empty() {
                break;
            }
            lines.push(line);
        }
        Ok(lines.join(" "))
    }

    pub(super) fn quick_query(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("QUICK QUERY MODE", 60)?;
        writeln!(self.output, "{}", QUICK_REFERENCE)?;
        writeln!(self.output, "Enter query (press Enter twice when done):")?;
        self.rule(60)?;

        let query = self.read_multiline()?;
        if query.trim().is_empty() {
            return Ok(());
        }

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "Your query:")?;
        writeln!(self.output, "{}", query)?;
        self.rule(60)?;

        let diagnostics = validation::validate(&query);
        if diagnostics.is_empty() {
            writeln!(self.output, "\nQuery looks valid!")?;
        } else {
            writeln!(self.output, "\nPotential issues found:")?;
            for diag in &diagnostics {
                writeln!(self.output, "  - {}", diag)?;
            }
        }

        writeln!(self.output, "\n[c] Copy to clipboard")?;
        if self.ask("[Enter] Continue: ")?.eq_ignore_ascii_case("c") {
            self.copy_to_clipboard(&query)?;
        }
        Ok(())
    }

    pub(super) fn validate_query(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("QUERY VALIDATOR", 60)?;
        writeln!(
            self.output,
            "\nEnter your AQL query to validate (Enter twice when done):"
        )?;
        self.rule(60)?;

        let query = self.read_multiline()?;
        if !query.trim().is_empty() {
            let diagnostics = validation::validate(&query);
            tracing::debug!(issues = diagnostics.len(), "validated query");

            writeln!(self.output, "\n{}", "=".repeat(60))?;
            writeln!(self.output, "VALIDATION RESULTS")?;
            writeln!(self.output, "{}", "=".repeat(60))?;

            if diagnostics.is_empty() {
                writeln!(self.output, "\n  Query appears to be valid!")?;
            } else {
                writeln!(self.output, "\nIssues found:")?;
                for diag in &diagnostics {
                    writeln!(self.output, "  ! {}", diag)?;
                }
            }

            writeln!(self.output, "\n{}", "-".repeat(60))?;
            writeln!(
                self.output,
                "Note: This validates syntax only. Runtime errors may still occur."
            )?;
            self.rule(60)?;
        }

        writeln!(self.output)?;
        self.pause()
    }

    pub(super) fn show_help(&mut self) -> io::Result<()> {
        self.clear()?;
        self.print_header()?;
        writeln!(self.output, "AQL SYNTAX GUIDE")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "{}", SYNTAX_GUIDE)?;
        self.pause()
    }
}
