//! Command parsing layer shared by the CLI and the interactive loop.
//!
//! A small hand-rolled parser keeps the interactive prompt and the clap CLI
//! routed through the same `Command` enum.

/// Parsed command from user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch and log one quote: `quote <symbol>`
    Quote { symbol: String },
    /// List the whole log: `log list`
    LogList,
    /// List one symbol's records: `log show <symbol>`
    LogShow { symbol: String },
    /// Discard every record: `log clear [--yes]`
    LogClear { assume_yes: bool },
    /// Show help
    Help,
    /// Exit/quit
    Exit,
}

/// Error type for command parsing
#[derive(Debug, Clone)]
pub struct CommandParseError {
    pub message: String,
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommandParseError {}

fn parse_error(message: impl Into<String>) -> CommandParseError {
    CommandParseError {
        message: message.into(),
    }
}

/// Parse a command string into a Command enum
///
/// Supports an optional leading slash. Examples:
/// - `quote aapl` or `/quote aapl`
/// - `log list`, `log show msft`, `log clear --yes`
/// - `help`, `exit`
pub fn parse_command(input: &str) -> Result<Command, CommandParseError> {
    let input = input.trim();

    if input.is_empty() {
        return Err(parse_error("Empty command. Type `help` for commands."));
    }

    let input = input.strip_prefix('/').unwrap_or(input);

    let mut parts = input.split_whitespace();
    let cmd = parts
        .next()
        .ok_or_else(|| parse_error("No command provided"))?;

    match cmd.to_lowercase().as_str() {
        "quote" | "fetch" => {
            let symbol = parts
                .next()
                .ok_or_else(|| {
                    parse_error("quote requires a symbol. Usage: quote <symbol>")
                })?
                .to_string();
            Ok(Command::Quote { symbol })
        }
        "log" => {
            let action = parts.next().unwrap_or("list").to_lowercase();
            match action.as_str() {
                "list" => Ok(Command::LogList),
                "show" => {
                    let symbol = parts
                        .next()
                        .ok_or_else(|| {
                            parse_error("log show requires a symbol. Usage: log show <symbol>")
                        })?
                        .to_string();
                    Ok(Command::LogShow { symbol })
                }
                "clear" => {
                    let assume_yes = parts.any(|p| p == "--yes" || p == "-y");
                    Ok(Command::LogClear { assume_yes })
                }
                other => Err(parse_error(format!(
                    "Unknown log action '{}'. Usage: log [list|show <symbol>|clear]",
                    other
                ))),
            }
        }
        "help" => Ok(Command::Help),
        "exit" | "quit" => Ok(Command::Exit),
        other => Err(parse_error(format!(
            "Unknown command '{}'. Type `help` for commands.",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quote() {
        assert_eq!(
            parse_command("quote aapl").unwrap(),
            Command::Quote {
                symbol: "aapl".to_string()
            }
        );
    }

    #[test]
    fn test_parse_quote_with_slash_prefix() {
        assert_eq!(
            parse_command("/quote MSFT").unwrap(),
            Command::Quote {
                symbol: "MSFT".to_string()
            }
        );
    }

    #[test]
    fn test_parse_quote_requires_symbol() {
        let err = parse_command("quote").unwrap_err();
        assert!(err.message.contains("requires a symbol"));
    }

    #[test]
    fn test_parse_log_defaults_to_list() {
        assert_eq!(parse_command("log").unwrap(), Command::LogList);
        assert_eq!(parse_command("log list").unwrap(), Command::LogList);
    }

    #[test]
    fn test_parse_log_show() {
        assert_eq!(
            parse_command("log show aapl").unwrap(),
            Command::LogShow {
                symbol: "aapl".to_string()
            }
        );
    }

    #[test]
    fn test_parse_log_show_requires_symbol() {
        assert!(parse_command("log show").is_err());
    }

    #[test]
    fn test_parse_log_clear_flags() {
        assert_eq!(
            parse_command("log clear").unwrap(),
            Command::LogClear { assume_yes: false }
        );
        assert_eq!(
            parse_command("log clear --yes").unwrap(),
            Command::LogClear { assume_yes: true }
        );
        assert_eq!(
            parse_command("log clear -y").unwrap(),
            Command::LogClear { assume_yes: true }
        );
    }

    #[test]
    fn test_parse_exit_aliases() {
        assert_eq!(parse_command("exit").unwrap(), Command::Exit);
        assert_eq!(parse_command("quit").unwrap(), Command::Exit);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = parse_command("frobnicate").unwrap_err();
        assert!(err.message.contains("Unknown command"));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_command("   ").is_err());
    }

    #[test]
    fn test_parse_is_case_insensitive_on_keywords() {
        assert_eq!(parse_command("LOG LIST").unwrap(), Command::LogList);
    }
}
