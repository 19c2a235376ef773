//! Interactive REPL for the calculator
//!
//! This module provides:
//! - The command loop and meta-commands (`q`, `c`, `s`)
//! - Token highlighting by evaluation class
//! - Completion and history hints through rustyline

pub mod config;
pub mod helper;
pub mod highlighter;
pub mod session;

// Re-exports for convenience
pub use config::ReplConfig;
pub use helper::RpnHelper;
pub use highlighter::{TokenClass, TokenHighlighter};
pub use session::{banner, Command, ReplEvent, ReplSession, StateTransition};
