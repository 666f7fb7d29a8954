//! Menu-driven terminal session.
//!
//! A [`Session`] owns the query under construction and reads all input from
//! a [`BufRead`], writing to a [`Write`]. The binary wires it to stdin and
//! stdout; tests drive it with in-memory buffers. End of input always backs
//! out of the current menu, so a session fed a finite script terminates.

mod browse;
mod builder;
mod freeform;

use std::io::{self, BufRead, Write};

use crate::clipboard;
use crate::config::Settings;
use crate::query::ClauseSet;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";
const MAIN_CHOICES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// An interactive query-building session.
pub struct Session<R, W> {
    input: R,
    output: W,
    clauses: ClauseSet,
    settings: Settings,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let clauses = settings.builder.new_clause_set();
        Self {
            input,
            output,
            clauses,
            settings,
            clear_screen: false,
        }
    }

    /// Emit ANSI clear-screen sequences between menus.
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// The query currently being built.
    pub fn clauses(&self) -> &ClauseSet {
        &self.clauses
    }

    /// Consume the session, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.clear()?;
            self.print_header()?;
            self.print_menu()?;

            let choice = self.choose("Enter choice: ", &MAIN_CHOICES)?;
            tracing::debug!(choice = %choice, "main menu");

            match choice.as_str() {
                "1" => self.interactive_build()?,
                "2" => self.show_templates()?,
                "3" => self.show_fields()?,
                "4" => self.show_functions()?,
                "5" => self.show_operators()?,
                "6" => self.show_time_clauses()?,
                "7" => self.quick_query()?,
                "8" => self.validate_query()?,
                "9" => self.show_help()?,
                _ => {
                    writeln!(self.output, "\nGoodbye!")?;
                    break;
                }
            }
        }
        self.output.flush()
    }

    fn print_header(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output, "           AQL BUILDER - QRadar Query Helper")?;
        writeln!(self.output, "{}", "=".repeat(60))?;
        writeln!(self.output)
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "MAIN MENU")?;
        writeln!(self.output, "{}", "-".repeat(40))?;
        writeln!(self.output, "  1. Build a new query (step-by-step)")?;
        writeln!(self.output, "  2. Query templates (pre-built queries)")?;
        writeln!(self.output, "  3. Reference - Fields")?;
        writeln!(self.output, "  4. Reference - Functions")?;
        writeln!(self.output, "  5. Reference - Operators")?;
        writeln!(self.output, "  6. Reference - Time clauses")?;
        writeln!(self.output, "  7. Quick query (free-form with hints)")?;
        writeln!(self.output, "  8. Validate a query")?;
        writeln!(self.output, "  9. Help / AQL Syntax Guide")?;
        writeln!(self.output, "  0. Exit")?;
        writeln!(self.output, "{}", "-".repeat(40))
    }

    // ========================================================================
    // Console helpers
    // ========================================================================

    /// Read one line without its terminator. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Show `text` and read a trimmed answer. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt) but end of input reads as an empty answer.
    fn ask(&mut self, text: &str) -> io::Result<String> {
        Ok(self.prompt(text)?.unwrap_or_default())
    }

    /// Re-prompt until one of `valid` is entered. End of input picks "0".
    fn choose(&mut self, text: &str, valid: &[&str]) -> io::Result<String> {
        loop {
            match self.prompt(text)? {
                None => {
                    writeln!(self.output)?;
                    return Ok("0".to_string());
                }
                Some(choice) if valid.contains(&choice.as_str()) => return Ok(choice),
                Some(_) => writeln!(
                    self.output,
                    "  Invalid choice. Please enter one of: {}",
                    valid.join(", ")
                )?,
            }
        }
    }

    fn pause(&mut self) -> io::Result<()> {
        self.prompt("  Press Enter to continue...")?;
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        if self.clear_screen {
            write!(self.output, "{}", CLEAR_SCREEN)?;
        }
        Ok(())
    }

    /// Heavy rule, title, heavy rule.
    fn banner(&mut self, title: &str, width: usize) -> io::Result<()> {
        writeln!(self.output, "{}", "=".repeat(width))?;
        writeln!(self.output, "{}", title)?;
        writeln!(self.output, "{}", "=".repeat(width))
    }

    fn rule(&mut self, width: usize) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(width))
    }

    /// Copy `query` to the clipboard, reporting the outcome inline.
    fn copy_to_clipboard(&mut self, query: &str) -> io::Result<()> {
        match clipboard::copy(query, &self.settings.clipboard) {
            Ok(_) => writeln!(self.output, "\n  Query copied to clipboard!")?,
            Err(e) => {
                tracing::warn!(error = %e, "clipboard copy failed");
                writeln!(self.output, "\n  {}", e)?;
                writeln!(self.output, "  Query: {}", query)?;
            }
        }
        self.pause()
    }
}
