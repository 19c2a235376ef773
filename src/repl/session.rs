//! Command loop for the calculator REPL
//!
//! Classifies submitted lines into meta-commands or token lines and drives
//! the [`Evaluator`]. Output goes to two generic writers so the loop runs
//! the same against a terminal or an in-memory buffer.

use std::io::{self, Write};

use tracing::debug;

use crate::backend::{Evaluator, Operator};

pub const TITLE: &str = "====================== ###RPN### ====================";
pub const FAREWELL: &str = "Goodbye!";
pub const CLEARED: &str = "Stack cleared.";

/// REPL events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplEvent {
    /// User submitted a line
    LineSubmitted(String),
    /// User interrupted (Ctrl-C)
    Interrupted,
    /// End of input (Ctrl-D or closed stdin)
    Eof,
}

/// What a submitted line asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Quit,
    Clear,
    Show,
    /// Tokens to apply in order
    Evaluate(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            "q" => Self::Quit,
            "c" => Self::Clear,
            "s" => Self::Show,
            _ => Self::Evaluate(line),
        }
    }
}

/// Result of handling one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateTransition {
    /// Keep reading input
    Continue,
    /// Farewell printed, stop the loop
    Exit,
}

/// Startup banner with the command legend
pub fn banner() -> String {
    format!(
        "{TITLE}\nq<Enter> quit\nc<Enter> clear\ns<Enter> show stack\n{}\n",
        Operator::legend()
    )
}

/// One calculator session: an evaluator plus its output and error streams
pub struct ReplSession<O: Write, E: Write> {
    evaluator: Evaluator,
    out: O,
    err: E,
}

impl<O: Write, E: Write> ReplSession<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            evaluator: Evaluator::new(),
            out,
            err,
        }
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Consume the session, returning the output and error streams
    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }

    pub fn print_banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", banner())?;
        self.out.flush()
    }

    /// Process an event and return the transition
    pub fn process_event(&mut self, event: ReplEvent) -> io::Result<StateTransition> {
        match event {
            ReplEvent::LineSubmitted(line) => self.handle_line(&line),
            ReplEvent::Interrupted => {
                debug!(target: "rpncalc::repl", "interrupted, line discarded");
                Ok(StateTransition::Continue)
            }
            ReplEvent::Eof => self.farewell(),
        }
    }

    /// Feed lines in order followed by end of input, stopping early on quit
    pub fn drive<I>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for line in lines {
            if self.process_event(ReplEvent::LineSubmitted(line.into()))?
                == StateTransition::Exit
            {
                return Ok(());
            }
        }
        self.process_event(ReplEvent::Eof).map(|_| ())
    }

    fn handle_line(&mut self, line: &str) -> io::Result<StateTransition> {
        match Command::parse(line) {
            Command::Quit => return self.farewell(),
            Command::Clear => {
                let discarded = self.evaluator.clear();
                debug!(target: "rpncalc::repl", discarded, "clear");
                writeln!(self.out, "{CLEARED}")?;
            }
            Command::Show => {
                writeln!(self.out, "{}", self.evaluator.render_stack())?;
            }
            Command::Evaluate(tokens) => match self.evaluator.apply_line(tokens) {
                Ok(_) => writeln!(self.out, "{}", self.evaluator.render_stack())?,
                Err(err) => {
                    writeln!(self.err, "Error: {err}")?;
                    self.err.flush()?;
                }
            },
        }
        self.out.flush()?;
        Ok(StateTransition::Continue)
    }

    fn farewell(&mut self) -> io::Result<StateTransition> {
        writeln!(self.out, "{FAREWELL}")?;
        self.out.flush()?;
        Ok(StateTransition::Exit)
    }
}
