//! Template browser and reference screens.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};

use super::Session;
use crate::query::Table;
use crate::reference::{self, FunctionCategory, OperatorKind, TimeStyle};
use crate::templates::{self, Category, Template, TIME_PRESETS};

/// Pick a 1-based entry from `items`.
fn pick<T>(items: &[T], choice: &str) -> Option<usize> {
    let n = choice.parse::<usize>().ok()?;
    (1..=items.len()).contains(&n).then(|| n - 1)
}

impl<R: BufRead, W: Write> Session<R, W> {
    // ========================================================================
    // Templates
    // ========================================================================

    pub(super) fn show_templates(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            self.banner("              AQL QUERY TEMPLATES", 60)?;
            writeln!(self.output)?;

            let categories = templates::categories();
            for (i, cat) in categories.iter().enumerate() {
                writeln!(
                    self.output,
                    "  {}. {} ({} queries)",
                    i + 1,
                    cat.name,
                    cat.templates.len()
                )?;
            }
            writeln!(self.output)?;
            writeln!(self.output, "  0. Back to main menu")?;
            self.rule(60)?;

            let Some(choice) = self.prompt("\nSelect category: ")? else {
                break;
            };
            if choice == "0" {
                break;
            }
            if let Some(idx) = pick(categories, &choice) {
                self.show_category(&categories[idx])?;
            }
        }
        Ok(())
    }

    fn show_category(&mut self, category: &Category) -> io::Result<()> {
        loop {
            self.clear()?;
            self.banner(&format!("  {}", category.name.to_uppercase()), 60)?;
            writeln!(self.output)?;

            for (i, t) in category.templates.iter().enumerate() {
                writeln!(self.output, "  {}. {}", i + 1, t.name)?;
                writeln!(self.output, "     {}", t.description)?;
                writeln!(self.output)?;
            }
            writeln!(self.output, "  0. Back")?;
            self.rule(60)?;

            let Some(choice) = self.prompt("\nSelect template: ")? else {
                break;
            };
            if choice == "0" {
                break;
            }
            if let Some(idx) = pick(category.templates, &choice) {
                self.show_template(&category.templates[idx])?;
            }
        }
        Ok(())
    }

    fn show_template(&mut self, template: &Template) -> io::Result<()> {
        self.clear()?;
        self.banner(&format!("  {}", template.name.to_uppercase()), 70)?;
        writeln!(self.output)?;
        writeln!(self.output, "Description: {}", template.description)?;
        writeln!(self.output)?;
        writeln!(self.output, "QUERY:")?;
        self.rule(70)?;
        writeln!(self.output, "{}", template.query)?;
        self.rule(70)?;

        if !template.params.is_empty() {
            writeln!(self.output, "\nCustomizable parameters:")?;
            for param in template.params {
                writeln!(self.output, "  - {}", param)?;
            }
        }

        writeln!(self.output, "\n{}", "-".repeat(70))?;
        writeln!(self.output, "OPTIONS:")?;
        writeln!(self.output, "  [c] Copy to clipboard")?;
        writeln!(self.output, "  [m] Modify parameters")?;
        writeln!(self.output, "  [Enter] Back")?;
        self.rule(70)?;

        match self.ask("\nChoice: ")?.to_lowercase().as_str() {
            "c" => self.copy_to_clipboard(template.query),
            "m" => self.modify_template(template),
            _ => Ok(()),
        }
    }

    fn modify_template(&mut self, template: &Template) -> io::Result<()> {
        self.clear()?;
        self.banner("MODIFY TEMPLATE", 60)?;
        writeln!(self.output)?;
        writeln!(
            self.output,
            "Enter values for placeholders (press Enter to keep default):"
        )?;
        writeln!(self.output)?;

        let mut values = HashMap::new();
        for name in template.placeholders() {
            let value = self.ask(&format!("  {}: ", name))?;
            values.insert(name.to_string(), value);
        }

        writeln!(self.output, "\nModify time range?")?;
        for (i, preset) in TIME_PRESETS.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, preset)?;
        }
        writeln!(self.output, "  5. Custom")?;
        writeln!(self.output, "  Enter. Keep current")?;

        let choice = self.ask("\nChoice: ")?;
        let time = match pick(&TIME_PRESETS, &choice) {
            Some(idx) => Some(TIME_PRESETS[idx].to_string()),
            None if choice == "5" => Some(self.ask("Enter custom time clause: ")?),
            None => None,
        };

        let query = template.render(&values, time.as_deref());
        tracing::debug!(template = template.name, "rendered template");

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "MODIFIED QUERY:")?;
        self.rule(60)?;
        writeln!(self.output, "{}", query)?;
        self.rule(60)?;

        writeln!(self.output, "\n[c] Copy to clipboard")?;
        if self.ask("[Enter] Back: ")?.eq_ignore_ascii_case("c") {
            self.copy_to_clipboard(&query)?;
        }
        Ok(())
    }

    // ========================================================================
    // Reference screens
    // ========================================================================

    pub(super) fn show_fields(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("                    AQL FIELD REFERENCE", 70)?;
        writeln!(self.output, "\n1. Event Fields")?;
        writeln!(self.output, "2. Flow Fields")?;
        writeln!(self.output, "3. Back to main menu")?;
        writeln!(self.output)?;

        match self.ask("Enter choice: ")?.as_str() {
            "1" => self.show_table_fields(Table::Events, "EVENT FIELDS"),
            "2" => self.show_table_fields(Table::Flows, "FLOW FIELDS"),
            _ => Ok(()),
        }
    }

    fn show_table_fields(&mut self, table: Table, title: &str) -> io::Result<()> {
        self.clear()?;
        self.banner(&format!("{:^80}", title), 80)?;
        writeln!(self.output)?;

        for (heading, names) in reference::field_groups(table) {
            writeln!(self.output, "\n{}", heading.to_uppercase())?;
            self.rule(70)?;
            for field in names.iter().filter_map(|name| reference::field(table, name)) {
                writeln!(
                    self.output,
                    "  {:<35} {:<12} {}",
                    field.name, field.ty, field.description
                )?;
            }
        }

        writeln!(self.output)?;
        self.pause()
    }

    pub(super) fn show_functions(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("                      AQL FUNCTION REFERENCE", 80)?;
        writeln!(self.output)?;
        for (i, cat) in FunctionCategory::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {} Functions", i + 1, cat.title())?;
        }
        writeln!(self.output, "{}. Back to main menu", FunctionCategory::ALL.len() + 1)?;
        writeln!(self.output)?;

        let choice = self.ask("Enter choice: ")?;
        let Some(idx) = pick(&FunctionCategory::ALL, &choice) else {
            return Ok(());
        };
        let category = FunctionCategory::ALL[idx];

        self.clear()?;
        self.banner(
            &format!("                    {} FUNCTIONS", category.title().to_uppercase()),
            90,
        )?;
        writeln!(self.output)?;
        for func in reference::functions(category) {
            writeln!(self.output, "  {}", func.name)?;
            writeln!(self.output, "    Syntax: {}", func.syntax)?;
            writeln!(self.output, "    {}", func.description)?;
            writeln!(self.output)?;
        }
        self.pause()
    }

    pub(super) fn show_operators(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("                      AQL OPERATOR REFERENCE", 80)?;

        for kind in OperatorKind::ALL {
            writeln!(self.output, "\n{} OPERATORS", kind.key().to_uppercase())?;
            self.rule(60)?;
            for op in reference::operators(kind) {
                writeln!(self.output, "  {:<15} {}", op.op, op.description)?;
            }
            writeln!(self.output)?;
        }

        writeln!(self.output, "EXAMPLES:")?;
        self.rule(60)?;
        for example in [
            "WHERE sourceip = '192.168.1.1'",
            "WHERE magnitude >= 7 AND severity > 5",
            "WHERE username LIKE 'admin%'",
            "WHERE payload ILIKE '%error%'",
            "WHERE sourceip MATCHES '192\\.168\\..*'",
            "WHERE sourceport IN (22, 23, 3389)",
            "WHERE eventcount BETWEEN 10 AND 100",
            "WHERE username IS NOT NULL",
        ] {
            writeln!(self.output, "  {}", example)?;
        }

        writeln!(self.output)?;
        self.pause()
    }

    pub(super) fn show_time_clauses(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("                      AQL TIME CLAUSES", 80)?;

        writeln!(self.output, "\nLAST CLAUSE (Relative Time)")?;
        self.rule(60)?;
        writeln!(self.output, "  Syntax: LAST <number> <unit>")?;
        writeln!(self.output, "  Units: MINUTES, HOURS, DAYS")?;
        writeln!(self.output)?;
        for ex in reference::time_examples(TimeStyle::Relative) {
            writeln!(self.output, "  {:<40} # {}", ex.clause, ex.description)?;
        }

        writeln!(self.output, "\n\nSTART/STOP CLAUSE (Absolute Time)")?;
        self.rule(60)?;
        writeln!(self.output, "  Syntax: START '<datetime>' [STOP '<datetime>']")?;
        writeln!(self.output, "  Format: yyyy-MM-dd HH:mm or yyyy-MM-dd HH:mm:ss")?;
        writeln!(self.output, "  Note: STOP is optional (defaults to now)")?;
        writeln!(self.output)?;
        self.print_time_examples(TimeStyle::Range)?;

        writeln!(self.output, "\nPARSEDATETIME (Dynamic Time)")?;
        self.rule(60)?;
        writeln!(self.output, "  Syntax: START PARSEDATETIME('time reference')")?;
        writeln!(self.output, "  References: 'now', '1 hour ago', '1 day ago', etc.")?;
        writeln!(self.output)?;
        self.print_time_examples(TimeStyle::ParseDateTime)?;

        writeln!(self.output, "\nIMPORTANT NOTES:")?;
        self.rule(60)?;
        writeln!(
            self.output,
            "  - Time clauses must come AFTER LIMIT clause if both are used"
        )?;
        writeln!(
            self.output,
            "  - Example: SELECT * FROM events LIMIT 100 LAST 1 HOURS"
        )?;

        writeln!(self.output)?;
        self.pause()
    }

    fn print_time_examples(&mut self, style: TimeStyle) -> io::Result<()> {
        for ex in reference::time_examples(style) {
            writeln!(self.output, "  {}", ex.clause)?;
            writeln!(self.output, "    # {}", ex.description)?;
            writeln!(self.output)?;
        }
        Ok(())
    }
}
