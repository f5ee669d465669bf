//! Command dispatcher that routes parsed commands to their handlers.
//!
//! One routing surface for both command sources (CLI args and interactive
//! input), with human-readable or JSON output per invocation.

use std::io::{BufRead, Write};

use anyhow::Result;
use colored::Colorize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::commands::Command;
use crate::scraping::QuoteExtractor;
use crate::store::QuoteRecord;
use crate::tracker::QuoteTracker;

/// Route a parsed command to its handler
pub async fn dispatch_command<E: QuoteExtractor>(
    tracker: &QuoteTracker<E>,
    command: Command,
    json_output: bool,
) -> Result<()> {
    match command {
        Command::Quote { symbol } => dispatch_quote(tracker, &symbol, json_output).await,
        Command::LogList => dispatch_log_list(tracker, json_output),
        Command::LogShow { symbol } => dispatch_log_show(tracker, &symbol, json_output),
        Command::LogClear { assume_yes } => dispatch_log_clear(tracker, assume_yes, json_output),
        Command::Help => {
            println!("Help: quotelog <command> [options]");
            println!("\nAvailable commands:");
            println!("  quote <symbol>      - Fetch one quote and append it to the log");
            println!("  log list            - List every logged quote");
            println!("  log show <symbol>   - List the logged quotes for one symbol");
            println!("  log clear [--yes]   - Discard every logged quote");
            println!("  help                - Show this help");
            println!("  exit                - Exit application");
            Ok(())
        }
        Command::Exit => {
            std::process::exit(0);
        }
    }
}

async fn dispatch_quote<E: QuoteExtractor>(
    tracker: &QuoteTracker<E>,
    symbol: &str,
    json_output: bool,
) -> Result<()> {
    let record = tracker.fetch_and_log(symbol).await?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    println!(
        "{} The value of the stock {} is {}$ at {}",
        "✓".green().bold(),
        record.symbol.bold(),
        record.quote.cyan(),
        record.formatted_time()
    );
    Ok(())
}

fn dispatch_log_list<E: QuoteExtractor>(
    tracker: &QuoteTracker<E>,
    json_output: bool,
) -> Result<()> {
    let records = tracker.list_all();

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("\n{} The quote log is empty.\n", "ℹ".blue().bold());
        return Ok(());
    }

    print_record_table(&records);
    Ok(())
}

fn dispatch_log_show<E: QuoteExtractor>(
    tracker: &QuoteTracker<E>,
    symbol: &str,
    json_output: bool,
) -> Result<()> {
    let records = tracker.list_by_symbol(symbol);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!(
            "\n{} No recorded log for the stock {}.\n",
            "ℹ".blue().bold(),
            symbol.trim().to_uppercase()
        );
        return Ok(());
    }

    print_record_table(&records);
    Ok(())
}

fn dispatch_log_clear<E: QuoteExtractor>(
    tracker: &QuoteTracker<E>,
    assume_yes: bool,
    json_output: bool,
) -> Result<()> {
    if !assume_yes && !confirm_clear()? {
        println!("Log left untouched");
        return Ok(());
    }

    tracker.clear_log()?;

    if json_output {
        println!("{}", serde_json::json!({ "cleared": true }));
        return Ok(());
    }

    println!("{} Log cleared", "✓".green().bold());
    Ok(())
}

// Clearing is irreversible; anything but an explicit yes keeps the log.
fn confirm_clear() -> Result<bool> {
    println!("Are you sure you want to clear the log? This action is irreversible");
    print!("y/N: ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

fn print_record_table(records: &[QuoteRecord]) {
    #[derive(Tabled)]
    struct QuoteRow {
        #[tabled(rename = "Symbol")]
        symbol: String,
        #[tabled(rename = "Quote")]
        quote: String,
        #[tabled(rename = "Logged at")]
        logged_at: String,
    }

    let rows: Vec<QuoteRow> = records
        .iter()
        .map(|r| QuoteRow {
            symbol: r.symbol.clone(),
            quote: format!("{}$", r.quote),
            logged_at: r.formatted_time(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..2)).with(Alignment::right()))
        .to_string();
    println!("{}", table);
    println!("{} record(s)\n", records.len());
}
