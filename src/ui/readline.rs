//! Readline wrapper with first-token command completion.

use std::path::PathBuf;

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::{Hinter, HistoryHinter};
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Config, Context, Editor, Helper};

pub struct CommandHelper {
    commands: Vec<String>,
    hinter: HistoryHinter,
}

impl CommandHelper {
    pub fn new(commands: &[&str]) -> Self {
        Self {
            commands: commands.iter().map(|c| c.to_string()).collect(),
            hinter: HistoryHinter::default(),
        }
    }
}

impl Helper for CommandHelper {}
impl Validator for CommandHelper {}
impl Highlighter for CommandHelper {}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let before = &line[..pos];

        // Only the command word gets completed; symbols are free-form
        if before.contains(char::is_whitespace) {
            return Ok((pos, Vec::new()));
        }

        let prefix = before.strip_prefix('/').unwrap_or(before);
        let start = pos - prefix.len();
        let prefix_lower = prefix.to_lowercase();

        let matches = self
            .commands
            .iter()
            .filter(|c| c.starts_with(&prefix_lower))
            .map(|c| {
                let replacement = format!("{} ", c);
                Pair {
                    display: replacement.clone(),
                    replacement,
                }
            })
            .collect();

        Ok((start, matches))
    }
}

/// Thin wrapper over `rustyline::Editor` with preset commands and history path.
pub struct Readline {
    editor: Editor<CommandHelper, DefaultHistory>,
    history_path: PathBuf,
}

impl Readline {
    pub fn new(commands: &[&str], history_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config = Config::builder()
            .history_ignore_dups(true)?
            .history_ignore_space(true)
            .build();
        let helper = CommandHelper::new(commands);
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let history_path = history_path.unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".quotelog/.history")
        });

        let _ = editor.load_history(&history_path);

        Ok(Self {
            editor,
            history_path,
        })
    }

    pub fn readline(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        let line = self.editor.readline(prompt)?;
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
            let _ = self.editor.append_history(&self.history_path);
        }
        Ok(line)
    }

    /// Utility for tests to inspect completions without terminal input.
    pub fn completions(&self, line: &str) -> Vec<String> {
        if let Some(helper) = self.editor.helper() {
            let pos = line.len();
            let history = self.editor.history();
            if let Ok((_, pairs)) = helper.complete(line, pos, &Context::new(history)) {
                return pairs.into_iter().map(|p| p.replacement).collect();
            }
        }
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_readline(name: &str) -> Readline {
        let tmp = std::env::temp_dir().join(name);
        let _ = std::fs::remove_file(&tmp);
        Readline::new(&["quote", "log", "help", "exit"], Some(tmp)).unwrap()
    }

    #[test]
    fn test_completer_suggests_quote() {
        let rl = test_readline("quotelog_history_test");
        let completions = rl.completions("qu");
        assert_eq!(completions, vec!["quote ".to_string()]);
    }

    #[test]
    fn test_completer_keeps_leading_slash() {
        let rl = test_readline("quotelog_history_test_slash");
        let completions = rl.completions("/l");
        assert_eq!(completions, vec!["log ".to_string()]);
    }

    #[test]
    fn test_completer_skips_later_tokens() {
        let rl = test_readline("quotelog_history_test_tokens");
        assert!(rl.completions("quote aa").is_empty());
    }
}
