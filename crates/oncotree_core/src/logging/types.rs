//! Levels, logger configuration and line prefixes.

use serde::{Deserialize, Serialize};

/// Severity of a progress line. Lines below the configured level are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

/// How a `RunLogger` filters and decorates lines.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Lowest level that is printed.
    pub level: LogLevel,
    /// Number of tool output lines kept for the failure tail.
    pub error_tail: usize,
    /// Prefix lines with a `[HH:MM:SS]` timestamp.
    pub show_timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            error_tail: 20,
            show_timestamps: false,
        }
    }
}

impl LogConfig {
    /// Everything down to debug, timestamped, with a longer tail.
    pub fn debug() -> Self {
        Self {
            level: LogLevel::Debug,
            error_tail: 50,
            show_timestamps: true,
        }
    }
}

/// Receives every printed line; stdout when not given.
pub type LogSink = Box<dyn Fn(&str) + Send + Sync>;

/// Decoration applied to a progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessagePrefix {
    /// `$ python -m venv ...`
    Command,
    /// `=== Install dependencies ===`
    Phase,
    Success,
    Warning,
    Error,
}

impl MessagePrefix {
    pub fn format(&self, message: &str) -> String {
        match self {
            Self::Command => format!("$ {message}"),
            Self::Phase => format!("=== {message} ==="),
            Self::Success => format!("[SUCCESS] {message}"),
            Self::Warning => format!("[WARNING] {message}"),
            Self::Error => format!("[ERROR] {message}"),
        }
    }
}
