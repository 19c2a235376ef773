//! Rustyline helper integration
//!
//! Integrates all REPL components into a single Helper trait implementation

use std::borrow::Cow;

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use super::config::ReplConfig;
use super::highlighter::TokenHighlighter;
use crate::backend::{Operator, OPERATORS};

/// Whole-line meta-commands
const META_COMMANDS: &[&str] = &["q", "c", "s"];

/// Non-numeric spellings the literal parser accepts
const LITERAL_WORDS: &[&str] = &["inf", "infinity"];

/// Calculator REPL helper integrating all components
pub struct RpnHelper {
    highlighter: TokenHighlighter,
    command_history: Vec<String>,
    history_size: usize,
}

impl RpnHelper {
    pub fn new(config: &ReplConfig) -> Self {
        Self {
            highlighter: TokenHighlighter::new(config.color),
            command_history: Vec::new(),
            history_size: config.history_size,
        }
    }

    /// Add command to history for hints
    pub fn add_to_history(&mut self, cmd: String) {
        if self.history_size == 0 {
            return;
        }
        if self.command_history.len() >= self.history_size {
            self.command_history.remove(0);
        }
        self.command_history.push(cmd);
    }

    fn get_all_completions() -> impl Iterator<Item = &'static str> {
        OPERATORS
            .into_iter()
            .map(Operator::symbol)
            .chain(META_COMMANDS.iter().copied())
            .chain(LITERAL_WORDS.iter().copied())
    }
}

impl Default for RpnHelper {
    fn default() -> Self {
        Self::new(&ReplConfig::default())
    }
}

impl Completer for RpnHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_before_cursor = &line[..pos];
        let word_start = line_before_cursor
            .rfind(char::is_whitespace)
            .map(|i| i + 1)
            .unwrap_or(0);
        let partial = &line_before_cursor[word_start..];

        if partial.is_empty() {
            return Ok((pos, vec![]));
        }

        let mut matches: Vec<Pair> = Self::get_all_completions()
            .filter(|comp| comp.starts_with(partial))
            .map(|comp| Pair {
                display: comp.to_string(),
                replacement: comp.to_string(),
            })
            .collect();
        matches.sort_by(|a, b| a.display.cmp(&b.display));

        Ok((word_start, matches))
    }
}

impl Hinter for RpnHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Only provide hints at the end of the line
        if line.is_empty() || pos < line.len() {
            return None;
        }

        self.command_history
            .iter()
            .rev()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Highlighter for RpnHelper {
    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize, forced: bool) -> bool {
        self.highlighter.highlight_char(line, pos, forced)
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        if !self.highlighter.is_enabled() {
            return Cow::Borrowed(hint);
        }
        // Dim the hint
        Cow::Owned(format!("\x1b[90m{}\x1b[0m", hint))
    }
}

// Every line is complete; malformed tokens are reported by the evaluator
impl Validator for RpnHelper {}

impl Helper for RpnHelper {}
