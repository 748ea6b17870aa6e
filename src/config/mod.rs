//! Persistent user settings.

mod ops;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// User configuration, read from `~/.config/termhere/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Which terminals to try.
    pub terminal: TerminalConfig,
    /// What to do when nothing launches.
    pub fallback: FallbackConfig,
    /// Log sink settings.
    pub log: LogConfig,
}

/// How the candidate list is built.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Optional preferred command, then the platform table.
    #[default]
    Cascade,
    /// Only `terminal.command`; failure is an error.
    Single,
}

/// Terminal selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TerminalConfig {
    /// Candidate list policy.
    pub profile: Profile,
    /// Command template tried before the platform table, e.g.
    /// `"kitty --directory {dir}"`. Words split on whitespace; single or
    /// double quotes group a word, without escapes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred: Option<String>,
    /// Command template for the `single` profile, split like `preferred`.
    pub command: String,
}

/// Fallback behaviour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FallbackConfig {
    /// Open a shell in the current terminal when no native terminal launches.
    pub integrated: bool,
}

/// Logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive, e.g. `"debug"` or `"termhere=trace"`.
    pub level: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            preferred: None,
            command: "gnome-terminal --working-directory={dir}".to_string(),
        }
    }
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self { integrated: true }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
