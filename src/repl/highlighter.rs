//! Token highlighter for the line editor
//!
//! Colours each whitespace-separated token by how the evaluator will treat it.

use std::borrow::Cow;

use rustyline::highlight::Highlighter;

use super::session::Command;
use crate::backend::{parse_literal, Operator};

/// ANSI color codes for terminal output
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const NUMBER: &str = "\x1b[33m"; // Yellow
    pub const OPERATOR: &str = "\x1b[91m"; // Bright red
    pub const KEYWORD: &str = "\x1b[95m"; // Bright magenta
    pub const INVALID: &str = "\x1b[4;31m"; // Underlined red
}

/// How a token will be evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    Operator,
    Number,
    /// A whole-line meta-command (`q`, `c`, `s`)
    Command,
    Invalid,
}

impl TokenClass {
    pub fn of(token: &str) -> Self {
        if Operator::from_symbol(token).is_some() {
            Self::Operator
        } else if parse_literal(token).is_ok() {
            Self::Number
        } else {
            Self::Invalid
        }
    }

    fn color(self) -> &'static str {
        match self {
            Self::Operator => colors::OPERATOR,
            Self::Number => colors::NUMBER,
            Self::Command => colors::KEYWORD,
            Self::Invalid => colors::INVALID,
        }
    }
}

/// Token-class highlighter
#[derive(Debug, Clone)]
pub struct TokenHighlighter {
    enabled: bool,
}

impl TokenHighlighter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Highlight a line with ANSI color codes, keeping its whitespace intact
    pub fn highlight_line(&self, line: &str) -> String {
        let whole_line_command = !matches!(Command::parse(line), Command::Evaluate(_));

        let mut result = String::with_capacity(line.len() * 2);
        let mut rest = line;
        while !rest.is_empty() {
            let ws_len = rest.len() - rest.trim_start().len();
            result.push_str(&rest[..ws_len]);
            rest = &rest[ws_len..];

            let token_len = rest.find(char::is_whitespace).unwrap_or(rest.len());
            if token_len == 0 {
                break;
            }
            let token = &rest[..token_len];
            let class = if whole_line_command {
                TokenClass::Command
            } else {
                TokenClass::of(token)
            };
            result.push_str(class.color());
            result.push_str(token);
            result.push_str(colors::RESET);
            rest = &rest[token_len..];
        }
        result
    }
}

impl Highlighter for TokenHighlighter {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if !self.enabled || line.trim().is_empty() {
            return Cow::Borrowed(line);
        }
        Cow::Owned(self.highlight_line(line))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        // Token classes change as characters are typed
        self.enabled
    }
}
