use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;

use quotelog::cli::{self, Cli};
use quotelog::commands::{parse_command, Command};
use quotelog::dispatcher::dispatch_command;
use quotelog::store::{get_default_log_path, QuoteStore};
use quotelog::tracker::QuoteTracker;
use quotelog::ui::Readline;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let store = open_store(cli.log_file.as_deref())?;
    let tracker = QuoteTracker::new(store);

    match cli.command {
        None => run_interactive(&tracker, cli.json).await,
        Some(command) => match cli::to_internal_command(&command) {
            Some(command) => dispatch_command(&tracker, command, cli.json).await,
            None => run_interactive(&tracker, cli.json).await,
        },
    }
}

/// Resolve the log artifact location: `--log-file` flag, then the
/// `QUOTELOG_FILE` env var, then the default under `$HOME/.quotelog`.
fn open_store(flag: Option<&str>) -> Result<QuoteStore> {
    let path = match flag {
        Some(p) => PathBuf::from(p),
        None => match std::env::var("QUOTELOG_FILE") {
            Ok(p) if !p.trim().is_empty() => PathBuf::from(p),
            _ => get_default_log_path()?,
        },
    };
    Ok(QuoteStore::new(path))
}

async fn run_interactive(tracker: &QuoteTracker, json_output: bool) -> Result<()> {
    println!("{}", "Stocks information".bold());
    println!("Commands: quote <symbol>, log list, log show <symbol>, log clear, help, exit\n");

    let mut rl = Readline::new(&["quote", "log", "help", "exit"], None)?;

    loop {
        match rl.readline("quotelog> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                match parse_command(&line) {
                    Ok(Command::Exit) => {
                        println!("Goodbye");
                        break;
                    }
                    Ok(command) => {
                        // Any per-operation failure is recoverable at the
                        // next prompt
                        if let Err(e) = dispatch_command(tracker, command, json_output).await {
                            eprintln!("{} {:#}", "✗".red().bold(), e);
                        }
                    }
                    Err(e) => eprintln!("{} {}", "✗".red().bold(), e),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("Goodbye");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
