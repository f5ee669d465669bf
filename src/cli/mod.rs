use clap::{Parser, Subcommand};

use crate::commands::Command;

#[derive(Parser)]
#[command(name = "quotelog")]
#[command(version, about = "Stock quote scraper with a durable quote log")]
#[command(
    long_about = "Fetch stock quotes from Yahoo Finance quote pages and keep them in a local, queryable log."
)]
pub struct Cli {
    /// Disable colorized/ANSI output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Output results in JSON format
    #[arg(long = "json", global = true)]
    pub json: bool,

    /// Path of the quote log artifact (default: ~/.quotelog/log.json)
    #[arg(long = "log-file", global = true, value_name = "PATH")]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch one stock quote and append it to the log
    Quote {
        /// Ticker symbol, any case (e.g. aapl)
        symbol: String,
    },

    /// Quote log management and viewing
    Log {
        #[command(subcommand)]
        action: LogCommands,
    },

    /// Start the interactive prompt
    Interactive,
}

#[derive(Subcommand)]
pub enum LogCommands {
    /// List every logged quote in insertion order
    List,

    /// List the logged quotes for one symbol
    Show {
        /// Ticker symbol, any case
        symbol: String,
    },

    /// Discard every logged quote (keeps the log file)
    Clear {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}

/// Convert clap `Commands` into the internal `commands::Command`.
/// Returns None for `interactive`, which is handled by the REPL loop.
pub fn to_internal_command(c: &Commands) -> Option<Command> {
    match c {
        Commands::Quote { symbol } => Some(Command::Quote {
            symbol: symbol.clone(),
        }),
        Commands::Log { action } => match action {
            LogCommands::List => Some(Command::LogList),
            LogCommands::Show { symbol } => Some(Command::LogShow {
                symbol: symbol.clone(),
            }),
            LogCommands::Clear { yes } => Some(Command::LogClear { assume_yes: *yes }),
        },
        Commands::Interactive => None,
    }
}
