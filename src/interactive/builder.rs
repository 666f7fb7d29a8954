//! Step-by-step clause builder.

use std::io::{self, BufRead, Write};

use super::Session;
use crate::query::{conditions, format_query, parse_columns, SortDir, Table, TimeClause, TimeUnit};
use crate::reference;

/// Which condition list a remove/clear action targets.
#[derive(Clone, Copy)]
enum ConditionList {
    Where,
    Having,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub(super) fn interactive_build(&mut self) -> io::Result<()> {
        self.clauses = self.settings.builder.new_clause_set();

        loop {
            self.clear()?;
            self.banner("          INTERACTIVE QUERY BUILDER", 60)?;
            self.print_current_query()?;

            writeln!(self.output, "BUILD OPTIONS:")?;
            self.rule(40)?;
            writeln!(self.output, "  1. Set SELECT columns")?;
            writeln!(self.output, "  2. Set FROM table (events/flows)")?;
            writeln!(self.output, "  3. Add WHERE condition")?;
            writeln!(self.output, "  4. Add GROUP BY columns")?;
            writeln!(self.output, "  5. Add HAVING condition")?;
            writeln!(self.output, "  6. Set ORDER BY")?;
            writeln!(self.output, "  7. Set LIMIT")?;
            writeln!(self.output, "  8. Set TIME clause")?;
            writeln!(self.output, "  9. Clear and restart")?;
            writeln!(self.output, "{}", "  -".repeat(20))?;
            writeln!(self.output, "  c. Copy query to clipboard")?;
            writeln!(self.output, "  f. Finish and display query")?;
            writeln!(self.output, "  q. Back to main menu")?;
            self.rule(40)?;

            let Some(choice) = self.prompt("Enter choice: ")? else {
                break;
            };
            tracing::debug!(choice = %choice, "builder menu");

            match choice.to_lowercase().as_str() {
                "q" => break,
                "1" => self.build_select()?,
                "2" => self.build_from()?,
                "3" => self.build_where()?,
                "4" => self.build_group_by()?,
                "5" => self.build_having()?,
                "6" => self.build_order_by()?,
                "7" => self.build_limit()?,
                "8" => self.build_time()?,
                "9" => {
                    self.clauses = self.settings.builder.new_clause_set();
                    writeln!(self.output, "\n  Query cleared!")?;
                    self.pause()?;
                }
                "c" => {
                    let query = self.clauses.to_aql();
                    self.copy_to_clipboard(&query)?;
                }
                "f" => {
                    if self.finish_query()? {
                        break;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn print_current_query(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n{}", "=".repeat(60))?;
        writeln!(self.output, "CURRENT QUERY:")?;
        self.rule(60)?;
        let formatted = format_query(&self.clauses.to_aql());
        writeln!(self.output, "{}", formatted)?;
        writeln!(self.output, "{}\n", "=".repeat(60))
    }

    fn build_select(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("SELECT COLUMNS", 60)?;

        let table = self.clauses.from;
        writeln!(self.output, "\nAvailable fields for {}:", table)?;
        self.rule(40)?;
        for (i, name) in reference::field_names(table).iter().enumerate() {
            write!(self.output, "  {:<30}", name)?;
            if (i + 1) % 2 == 0 {
                writeln!(self.output)?;
            }
        }
        writeln!(self.output)?;

        writeln!(self.output, "\nCOMMON FUNCTIONS:")?;
        writeln!(
            self.output,
            "  LOGSOURCENAME(logsourceid), QIDNAME(qid), CATEGORYNAME(category)"
        )?;
        writeln!(
            self.output,
            "  DATEFORMAT(starttime, 'yyyy-MM-dd HH:mm:ss'), COUNT(*), SUM(field)"
        )?;

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "Enter columns separated by commas, or:")?;
        writeln!(self.output, "  * for all columns")?;
        writeln!(self.output, "  Press Enter to keep current selection")?;
        self.rule(60)?;

        let current = if self.clauses.select.is_empty() {
            "*".to_string()
        } else {
            self.clauses.select.join(", ")
        };
        writeln!(self.output, "Current: {}\n", current)?;

        let input = self.ask("Columns: ")?;
        if !input.is_empty() {
            self.clauses.set_select(&parse_columns(&input));
        }
        Ok(())
    }

    fn build_from(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("SELECT TABLE", 60)?;
        writeln!(self.output, "\nAvailable tables:")?;
        for (i, table) in Table::ALL.iter().enumerate() {
            writeln!(
                self.output,
                "  {}. {:<6} - {}",
                i + 1,
                table,
                table.description()
            )?;
        }
        writeln!(self.output, "\nCurrent: {}\n", self.clauses.from)?;

        match self
            .ask("Enter 1 or 2 (or press Enter to keep current): ")?
            .as_str()
        {
            "1" => self.clauses.set_from(Table::Events),
            "2" => self.clauses.set_from(Table::Flows),
            _ => {}
        }
        Ok(())
    }

    fn build_where(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("WHERE CONDITIONS", 60)?;
        self.print_conditions("\nCurrent conditions:", ConditionList::Where)?;

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "OPTIONS:")?;
        writeln!(self.output, "  1. Add new condition")?;
        writeln!(self.output, "  2. Remove a condition")?;
        writeln!(self.output, "  3. Clear all conditions")?;
        writeln!(self.output, "  4. Back")?;
        self.rule(60)?;

        match self.ask("Choice: ")?.as_str() {
            "1" => self.add_where_condition()?,
            "2" => self.remove_condition(ConditionList::Where)?,
            "3" => {
                self.clauses.clear_where();
                writeln!(self.output, "\n  All conditions cleared!")?;
                self.pause()?;
            }
            _ => {}
        }
        Ok(())
    }

    fn add_where_condition(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("ADD WHERE CONDITION", 60)?;

        writeln!(self.output, "\nCOMMON PATTERNS:")?;
        self.rule(60)?;
        for (label, example) in [
            ("IP matching:", "sourceip = '192.168.1.1'"),
            ("CIDR range:", "INCIDR('192.168.0.0/16', sourceip)"),
            ("String equals:", "username = 'admin'"),
            ("Pattern match:", "payload ILIKE '%error%'"),
            ("Regex match:", "username IMATCHES '.*admin.*'"),
            ("Numeric compare:", "magnitude >= 7"),
            ("Range:", "eventcount BETWEEN 10 AND 100"),
            ("List:", "sourceport IN (22, 23, 3389)"),
            ("Null check:", "username IS NOT NULL"),
            ("Log source:", "LOGSOURCENAME(logsourceid) ILIKE '%Windows%'"),
            ("Event name:", "QIDNAME(qid) ILIKE '%login%'"),
        ] {
            writeln!(self.output, "  {:<18} {}", label, example)?;
        }
        self.rule(60)?;

        writeln!(self.output, "\nQuick add (enter number):")?;
        writeln!(self.output, "  1. Filter by source IP")?;
        writeln!(self.output, "  2. Filter by destination IP")?;
        writeln!(self.output, "  3. Filter by username")?;
        writeln!(self.output, "  4. Filter by magnitude")?;
        writeln!(self.output, "  5. Filter by log source")?;
        writeln!(self.output, "  6. Filter by event name (QID)")?;
        writeln!(self.output, "  7. Custom condition")?;

        let condition = match self.ask("\nChoice: ")?.as_str() {
            "1" => conditions::source_ip(&self.ask("Enter source IP (or CIDR): ")?),
            "2" => conditions::destination_ip(&self.ask("Enter destination IP (or CIDR): ")?),
            "3" => conditions::username(&self.ask("Enter username (use % for wildcard): ")?),
            "4" => {
                writeln!(self.output, "  Operators: = != < > <= >=")?;
                let op = self.ask("  Operator: ")?;
                let value = self.ask("  Value (1-10): ")?;
                conditions::magnitude(&op, &value)
            }
            "5" => conditions::log_source(
                &self.ask("Enter log source name pattern (use % for wildcard): ")?,
            ),
            "6" => conditions::event_name(
                &self.ask("Enter event name pattern (use % for wildcard): ")?,
            ),
            "7" => self.ask("Enter custom condition: ")?,
            _ => String::new(),
        };

        if !condition.is_empty() {
            self.clauses.add_where(&condition);
            writeln!(self.output, "\n  Added: {}", condition)?;
            self.pause()?;
        }
        Ok(())
    }

    fn print_conditions(&mut self, heading: &str, list: ConditionList) -> io::Result<()> {
        writeln!(self.output, "{}", heading)?;
        let conditions = match list {
            ConditionList::Where => &self.clauses.where_conditions,
            ConditionList::Having => &self.clauses.having,
        };
        if conditions.is_empty() {
            writeln!(self.output, "  (none)")?;
        }
        for (i, cond) in conditions.iter().enumerate() {
            writeln!(self.output, "  {}. {}", i + 1, cond)?;
        }
        Ok(())
    }

    fn remove_condition(&mut self, list: ConditionList) -> io::Result<()> {
        let empty = match list {
            ConditionList::Where => self.clauses.where_conditions.is_empty(),
            ConditionList::Having => self.clauses.having.is_empty(),
        };
        if empty {
            writeln!(self.output, "\n  No conditions to remove!")?;
            return self.pause();
        }

        writeln!(self.output, "\nEnter number to remove (or press Enter to cancel): ")?;
        let input = self.ask("Number: ")?;
        if !input.is_empty() {
            match input.parse::<usize>() {
                Ok(n) if n >= 1 => {
                    let removed = match list {
                        ConditionList::Where => self.clauses.remove_where(n - 1),
                        ConditionList::Having => self.clauses.remove_having(n - 1),
                    };
                    match removed {
                        Ok(cond) => writeln!(self.output, "\n  Removed: {}", cond)?,
                        Err(_) => writeln!(self.output, "\n  Invalid number!")?,
                    }
                }
                Ok(_) => writeln!(self.output, "\n  Invalid number!")?,
                Err(_) => writeln!(self.output, "\n  Invalid input!")?,
            }
        }
        self.pause()
    }

    fn build_group_by(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("GROUP BY", 60)?;

        writeln!(self.output, "\nCurrent GROUP BY columns:")?;
        if self.clauses.group_by.is_empty() {
            writeln!(self.output, "  (none)")?;
        } else {
            writeln!(self.output, "  {}", self.clauses.group_by.join(", "))?;
        }

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(
            self.output,
            "When using GROUP BY, use aggregation functions in SELECT:"
        )?;
        writeln!(
            self.output,
            "  COUNT(*), SUM(field), AVG(field), MIN(field), MAX(field)"
        )?;
        writeln!(self.output)?;
        writeln!(self.output, "Example SELECT with GROUP BY:")?;
        writeln!(self.output, "  SELECT sourceip, COUNT(*) as count, SUM(eventcount)")?;
        self.rule(60)?;

        writeln!(self.output, "\nEnter columns to group by (comma-separated)")?;
        writeln!(self.output, "Or press Enter to keep current:")?;

        let input = self.ask("\nColumns: ")?;
        if !input.is_empty() {
            self.clauses.set_group_by(&parse_columns(&input));
        }
        Ok(())
    }

    fn build_having(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("HAVING (filter on aggregated results)", 60)?;
        self.print_conditions("\nCurrent HAVING conditions:", ConditionList::Having)?;

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "HAVING is used to filter results after GROUP BY")?;
        writeln!(self.output, "Example: HAVING COUNT(*) > 10")?;
        self.rule(60)?;

        writeln!(self.output, "\nOPTIONS:")?;
        writeln!(self.output, "  1. Add new HAVING condition")?;
        writeln!(self.output, "  2. Remove a condition")?;
        writeln!(self.output, "  3. Clear all")?;
        writeln!(self.output, "  4. Back")?;

        match self.ask("\nChoice: ")?.as_str() {
            "1" => {
                let condition = self.ask("\nEnter HAVING condition: ")?;
                self.clauses.add_having(&condition);
            }
            "2" => self.remove_condition(ConditionList::Having)?,
            "3" => self.clauses.clear_having(),
            _ => {}
        }
        Ok(())
    }

    fn build_order_by(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("ORDER BY", 60)?;

        writeln!(self.output, "\nCurrent ORDER BY:")?;
        if self.clauses.order_by.is_empty() {
            writeln!(self.output, "  (none)")?;
        } else {
            writeln!(
                self.output,
                "  {} {}",
                self.clauses.order_by.join(", "),
                self.clauses.order_dir
            )?;
        }

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "Common ORDER BY columns:")?;
        writeln!(self.output, "  starttime, magnitude, eventcount, sourceip")?;
        writeln!(self.output, "  Or use aggregates: COUNT(*), SUM(eventcount)")?;
        self.rule(60)?;

        let input = self.ask("\nEnter column(s) to order by (comma-separated): ")?;
        if input.is_empty() {
            return Ok(());
        }

        let default_dir = self.settings.builder.order_dir;
        writeln!(self.output, "\nDirection:")?;
        writeln!(self.output, "  1. DESC (descending - highest first)")?;
        writeln!(self.output, "  2. ASC (ascending - lowest first)")?;
        let dir = match self
            .ask(&format!("Choice (default {}): ", default_dir))?
            .as_str()
        {
            "1" => SortDir::Desc,
            "2" => SortDir::Asc,
            _ => default_dir,
        };

        self.clauses.set_order_by(&parse_columns(&input), dir);
        Ok(())
    }

    fn build_limit(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("LIMIT", 60)?;

        match self.clauses.limit {
            Some(limit) => writeln!(self.output, "\nCurrent LIMIT: {}", limit)?,
            None => writeln!(self.output, "\nCurrent LIMIT: (none)")?,
        }

        writeln!(
            self.output,
            "\nEnter maximum number of results (or press Enter to clear):"
        )?;
        let input = self.ask("Limit: ")?;

        if input.is_empty() {
            self.clauses.clear_limit();
        } else if let Err(e) = self.clauses.set_limit_str(&input) {
            tracing::debug!(input = %input, error = %e, "rejected LIMIT");
            writeln!(self.output, "  {}", e)?;
            self.pause()?;
        }
        Ok(())
    }

    fn build_time(&mut self) -> io::Result<()> {
        self.clear()?;
        self.banner("TIME CLAUSE", 60)?;

        match &self.clauses.time {
            Some(time) => writeln!(self.output, "\nCurrent time clause: {}", time)?,
            None => writeln!(self.output, "\nCurrent time clause: (none)")?,
        }

        writeln!(self.output, "\n{}", "-".repeat(60))?;
        writeln!(self.output, "OPTIONS:")?;
        writeln!(self.output, "  1. LAST (relative time)")?;
        writeln!(self.output, "  2. START/STOP (specific date range)")?;
        writeln!(self.output, "  3. Clear time clause")?;
        writeln!(self.output, "  4. Back")?;
        self.rule(60)?;

        match self.ask("\nChoice: ")?.as_str() {
            "1" => {
                writeln!(
                    self.output,
                    "\nExamples: 5 MINUTES, 1 HOURS, 24 HOURS, 7 DAYS"
                )?;
                let amount = self.ask("Enter time amount: ")?;
                let amount = if amount.is_empty() { "1".to_string() } else { amount };
                writeln!(self.output, "Units: 1=MINUTES, 2=HOURS, 3=DAYS")?;
                let unit = match self.ask("Unit: ")?.as_str() {
                    "1" => TimeUnit::Minutes,
                    "3" => TimeUnit::Days,
                    _ => TimeUnit::Hours,
                };
                match amount.parse::<u32>() {
                    Ok(amount) => self.clauses.set_time(TimeClause::last(amount, unit)),
                    Err(_) => {
                        writeln!(self.output, "  Invalid number!")?;
                        self.pause()?;
                    }
                }
            }
            "2" => {
                writeln!(
                    self.output,
                    "\nFormat: yyyy-MM-dd HH:mm or yyyy-MM-dd HH:mm:ss"
                )?;
                let start = self.ask("Start datetime: ")?;
                let stop = self.ask("Stop datetime (leave empty for now): ")?;
                if !start.is_empty() {
                    let stop = (!stop.is_empty()).then_some(stop.as_str());
                    self.clauses.set_time(TimeClause::range(&start, stop));
                }
            }
            "3" => self.clauses.clear_time(),
            _ => {}
        }
        Ok(())
    }

    /// Show the final query. Returns true when the user asks to leave the
    /// builder.
    fn finish_query(&mut self) -> io::Result<bool> {
        self.clear()?;
        self.banner("FINAL QUERY", 60)?;

        let query = self.clauses.to_aql();

        writeln!(self.output, "\nFormatted:")?;
        self.rule(60)?;
        writeln!(self.output, "{}", format_query(&query))?;
        self.rule(60)?;

        writeln!(self.output, "\nSingle line:")?;
        self.rule(60)?;
        writeln!(self.output, "{}", query)?;
        self.rule(60)?;

        writeln!(self.output, "\n[c] Copy to clipboard")?;
        writeln!(self.output, "[Enter] Continue building")?;
        writeln!(self.output, "[q] Back to main menu")?;

        match self.ask("\nChoice: ")?.to_lowercase().as_str() {
            "c" => {
                self.copy_to_clipboard(&query)?;
                Ok(false)
            }
            "q" => Ok(true),
            _ => Ok(false),
        }
    }
}
