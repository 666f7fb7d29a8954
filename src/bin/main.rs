//! AQL Builder CLI - Build and check QRadar AQL queries
//!
//! Usage:
//!   aql-builder [interactive]
//!   aql-builder validate [QUERY]
//!   aql-builder build --from flows --where "sourceip = '10.0.0.1'" --last "24 HOURS"
//!   aql-builder templates [--search <kw>] [--show <name> [--set KEY=VALUE]... [--time <clause>]]
//!   aql-builder reference <fields|functions|operators|time> [--table flows]
//!   aql-builder serve [--host <host>] [--port <port>]
//!
//! Examples:
//!   aql-builder validate "SELECT * FROM events LAST 1 HOURS"
//!   echo "select sourceip from bogus" | aql-builder validate
//!   aql-builder templates --show "Activity by IP Address" --set IP_ADDRESS=10.0.0.1

use aql_builder::config::Settings;
use aql_builder::interactive::Session;
use aql_builder::query::{ClauseError, ClauseSet, SortDir, Table, TimeClause, TimeUnit};
use aql_builder::reference::{self, FunctionCategory, OperatorKind, TimeStyle};
use aql_builder::templates;
use aql_builder::validation;
use clap::{Parser, Subcommand, ValueEnum};
use std::collections::HashMap;
use std::io::{self, IsTerminal, Read};
use std::num::NonZeroU64;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "aql-builder")]
#[command(about = "AQL Builder - Build, browse and sanity-check QRadar AQL queries")]
#[command(version)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a settings file (overrides the default search)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the menu-driven query builder (default)
    Interactive,

    /// Check a query for common mistakes
    Validate {
        /// Query text (read from stdin if omitted)
        query: Option<String>,
    },

    /// Assemble a query from clause values
    Build {
        /// Comma-separated SELECT columns
        #[arg(short, long)]
        select: Option<String>,

        /// Table to query (events or flows)
        #[arg(short, long)]
        from: Option<Table>,

        /// WHERE condition (repeatable, joined with AND)
        #[arg(short, long = "where")]
        where_conditions: Vec<String>,

        /// Comma-separated GROUP BY columns
        #[arg(long)]
        group_by: Option<String>,

        /// HAVING condition (repeatable, joined with AND)
        #[arg(long)]
        having: Vec<String>,

        /// Comma-separated ORDER BY columns
        #[arg(long)]
        order_by: Option<String>,

        /// ORDER BY direction (ASC or DESC)
        #[arg(long)]
        order_dir: Option<SortDir>,

        /// Maximum number of results
        #[arg(short, long)]
        limit: Option<NonZeroU64>,

        /// Relative time range, e.g. "24 HOURS"
        #[arg(long, conflicts_with = "time")]
        last: Option<String>,

        /// Time clause passed through verbatim
        #[arg(long)]
        time: Option<String>,

        /// Print one clause per line
        #[arg(short, long)]
        multiline: bool,
    },

    /// Browse and render query templates
    Templates {
        /// Only list templates whose name or description matches
        #[arg(long)]
        search: Option<String>,

        /// Print a template's query
        #[arg(long)]
        show: Option<String>,

        /// Placeholder value for --show (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", requires = "show")]
        values: Vec<String>,

        /// Replacement time range for --show
        #[arg(long, requires = "show")]
        time: Option<String>,
    },

    /// Print the AQL reference catalog
    Reference {
        topic: Topic,

        /// Table whose fields to list
        #[arg(short, long, default_value = "events")]
        table: Table,
    },

    /// Start the HTTP API
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind (defaults to the settings file)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (defaults to the settings file)
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Topic {
    Fields,
    Functions,
    Operators,
    Time,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = match load_settings(cli.config.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => cmd_interactive(settings),
        Commands::Validate { query } => cmd_validate(query),
        Commands::Build {
            select,
            from,
            where_conditions,
            group_by,
            having,
            order_by,
            order_dir,
            limit,
            last,
            time,
            multiline,
        } => {
            let mut clauses = settings.builder.new_clause_set();
            if let Some(table) = from {
                clauses.set_from(table);
            }
            if let Some(select) = select {
                clauses.set_select(&split_columns(&select));
            }
            for condition in &where_conditions {
                clauses.add_where(condition);
            }
            if let Some(group_by) = group_by {
                clauses.set_group_by(&split_columns(&group_by));
            }
            for condition in &having {
                clauses.add_having(condition);
            }
            if let Some(order_by) = order_by {
                let dir = order_dir.unwrap_or(settings.builder.order_dir);
                clauses.set_order_by(&split_columns(&order_by), dir);
            }
            if let Some(limit) = limit {
                clauses.set_limit(limit);
            }
            if let Some(last) = last {
                match parse_last(&last) {
                    Ok(clause) => clauses.set_time(clause),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        return ExitCode::FAILURE;
                    }
                }
            }
            if let Some(time) = time {
                clauses.set_time(TimeClause::raw(&time));
            }
            cmd_build(&clauses, multiline)
        }
        Commands::Templates {
            search,
            show,
            values,
            time,
        } => match show {
            Some(name) => cmd_template_show(&name, &values, time.as_deref()),
            None => cmd_templates_list(search.as_deref()),
        },
        Commands::Reference { topic, table } => cmd_reference(topic, table),
        #[cfg(feature = "web")]
        Commands::Serve { host, port } => {
            let mut settings = settings;
            if let Some(host) = host {
                settings.server.host = host;
            }
            if let Some(port) = port {
                settings.server.port = port;
            }
            cmd_serve(settings)
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_settings(path: Option<&Path>) -> Result<Settings, aql_builder::config::SettingsError> {
    match path {
        Some(path) => Settings::from_file(path),
        None => Settings::load(),
    }
}

fn split_columns(input: &str) -> Vec<&str> {
    input.split(',').collect()
}

/// Parse `"<amount> <unit>"`, e.g. `24 HOURS`.
fn parse_last(input: &str) -> Result<TimeClause, String> {
    let mut parts = input.split_whitespace();
    let (Some(amount), Some(unit), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!(
            "Invalid time range '{}'. Expected e.g. '24 HOURS'",
            input
        ));
    };

    let amount: u32 = amount
        .parse()
        .map_err(|_| format!("Invalid number: '{}'", amount))?;
    let unit: TimeUnit = unit.parse().map_err(|e: ClauseError| e.to_string())?;
    Ok(TimeClause::last(amount, unit))
}

fn cmd_interactive(settings: Settings) -> ExitCode {
    let clear_screen = io::stdout().is_terminal();
    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), settings)
        .with_clear_screen(clear_screen);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_validate(query: Option<String>) -> ExitCode {
    let query = match query {
        Some(q) => q,
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                eprintln!("Error reading stdin: {}", e);
                return ExitCode::FAILURE;
            }
            buf.lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        }
    };

    if query.trim().is_empty() {
        eprintln!("Error: no query given");
        return ExitCode::FAILURE;
    }

    let diagnostics = validation::validate(&query);
    if diagnostics.is_empty() {
        println!("OK: query appears to be valid");
        return ExitCode::SUCCESS;
    }

    for diag in &diagnostics {
        println!("{}", diag);
    }

    if diagnostics.iter().any(|d| d.is_error()) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn cmd_build(clauses: &ClauseSet, multiline: bool) -> ExitCode {
    if multiline {
        println!("{}", clauses.to_aql_multiline());
    } else {
        println!("{}", clauses.to_aql());
    }

    for diag in validation::validate_clauses(clauses) {
        eprintln!("{}", diag);
    }
    ExitCode::SUCCESS
}

fn cmd_templates_list(search: Option<&str>) -> ExitCode {
    if let Some(keyword) = search {
        let matches = templates::search(keyword);
        if matches.is_empty() {
            println!("No templates match '{}'.", keyword);
        }
        for (category, template) in matches {
            println!("  - {} [{}]", template.name, category);
            println!("    {}", template.description);
        }
        return ExitCode::SUCCESS;
    }

    for category in templates::categories() {
        println!("{}:", category.name);
        for template in category.templates {
            println!("  - {}", template.name);
            println!("    {}", template.description);
        }
        println!();
    }
    ExitCode::SUCCESS
}

fn cmd_template_show(name: &str, assignments: &[String], time: Option<&str>) -> ExitCode {
    let Some(template) = templates::find_by_name(name) else {
        eprintln!("Error: unknown template '{}'", name);
        return ExitCode::FAILURE;
    };

    let mut values = HashMap::new();
    for assignment in assignments {
        let Some((key, value)) = assignment.split_once('=') else {
            eprintln!("Error: expected KEY=VALUE, got '{}'", assignment);
            return ExitCode::FAILURE;
        };
        values.insert(key.trim().to_string(), value.to_string());
    }

    let query = template.render(&values, time);
    let missing = templates::placeholders(&query);
    if !missing.is_empty() {
        tracing::warn!(placeholders = ?missing, "unfilled template placeholders");
    }

    println!("{}", query);
    ExitCode::SUCCESS
}

fn cmd_reference(topic: Topic, table: Table) -> ExitCode {
    match topic {
        Topic::Fields => {
            println!("{} fields:", table);
            for field in reference::fields(table) {
                println!("  {:<35} {:<12} {}", field.name, field.ty, field.description);
            }
        }
        Topic::Functions => {
            for category in FunctionCategory::ALL {
                println!("{}:", category.title());
                for func in reference::functions(category) {
                    println!("  {:<22} {}", func.name, func.syntax);
                    println!("  {:<22} {}", "", func.description);
                }
                println!();
            }
        }
        Topic::Operators => {
            for kind in OperatorKind::ALL {
                println!("{}:", kind.key());
                for op in reference::operators(kind) {
                    println!("  {:<15} {}", op.op, op.description);
                }
                println!();
            }
        }
        Topic::Time => {
            for style in TimeStyle::ALL {
                println!("{}:", style.key());
                for ex in reference::time_examples(style) {
                    println!("  {:<60} # {}", ex.clause, ex.description);
                }
                println!();
            }
        }
    }
    ExitCode::SUCCESS
}

#[cfg(feature = "web")]
fn cmd_serve(settings: Settings) -> ExitCode {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Error starting runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(aql_builder::web::serve(settings)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Server error: {}", e);
            ExitCode::FAILURE
        }
    }
}
