//! REPL configuration
//!
//! Settings are compiled in; there is no config file, environment
//! variable, or command-line flag that changes them.

use tracing::Level;

/// REPL configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Primary prompt
    pub prompt: String,
    /// In-memory history entries kept for hints
    pub history_size: usize,
    /// Maximum level of diagnostics written to stderr
    pub log_level: Level,
    /// Colour tokens while editing
    pub color: bool,
}

impl ReplConfig {
    /// Load configuration from default locations
    pub fn load() -> Self {
        Self::default()
    }
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            prompt: ">>> ".to_string(),
            history_size: 100,
            log_level: Level::WARN,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_is_default() {
        let config = ReplConfig::load();
        assert_eq!(config, ReplConfig::default());
        assert_eq!(config.prompt, ">>> ");
        assert_eq!(config.log_level, Level::WARN);
    }
}
