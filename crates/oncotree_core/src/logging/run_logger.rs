//! Per-run logger with sink output and history.
//!
//! Each bootstrap or conversion run gets its own logger that:
//! - Sends plain progress lines to a sink (stdout unless one is provided)
//! - Keeps the full line history for diagnostics
//! - Maintains a tail buffer of external tool output for error diagnosis

use std::collections::VecDeque;
use std::io::{self, Write};
use std::sync::Arc;

use chrono::Local;
use parking_lot::Mutex;

use super::types::{LogConfig, LogLevel, LogSink, MessagePrefix};

/// Per-run logger.
pub struct RunLogger {
    /// Run name for identification.
    run_name: String,
    /// Where formatted lines go.
    sink: LogSink,
    /// Logging configuration.
    config: LogConfig,
    /// Every line emitted so far.
    history: Arc<Mutex<Vec<String>>>,
    /// Recent tool output lines (used for error diagnosis).
    tail_buffer: Arc<Mutex<VecDeque<String>>>,
}

impl RunLogger {
    /// Create a new run logger.
    ///
    /// # Arguments
    /// * `run_name` - Name of the run (shows up in tracing events)
    /// * `config` - Logging configuration
    /// * `sink` - Optional line sink; defaults to stdout
    pub fn new(run_name: impl Into<String>, config: LogConfig, sink: Option<LogSink>) -> Self {
        let sink = sink.unwrap_or_else(|| Box::new(|line: &str| {
            // A closed stdout must not abort the run
            let _ = writeln!(io::stdout().lock(), "{}", line);
        }));
        let tail_capacity = config.error_tail;

        Self {
            run_name: run_name.into(),
            sink,
            config,
            history: Arc::new(Mutex::new(Vec::new())),
            tail_buffer: Arc::new(Mutex::new(VecDeque::with_capacity(tail_capacity))),
        }
    }

    /// Create a logger that only records history (no output).
    pub fn silent(run_name: impl Into<String>) -> Self {
        Self::new(run_name, LogConfig::default(), Some(Box::new(|_| {})))
    }

    /// Get the run name.
    pub fn run_name(&self) -> &str {
        &self.run_name
    }

    /// Log a message at the specified level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.config.level {
            return;
        }

        let formatted = self.format_message(message);
        self.output(&formatted);
    }

    /// Log an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log a warning message.
    pub fn warn(&self, message: &str) {
        let msg = MessagePrefix::Warning.format(message);
        self.log(LogLevel::Warn, &msg);
    }

    /// Log an error message.
    pub fn error(&self, message: &str) {
        let msg = MessagePrefix::Error.format(message);
        self.log(LogLevel::Error, &msg);
    }

    /// Log a command being executed.
    pub fn command(&self, command: &str) {
        let msg = MessagePrefix::Command.format(command);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a phase marker.
    pub fn phase(&self, phase_name: &str) {
        let msg = MessagePrefix::Phase.format(phase_name);
        self.log(LogLevel::Info, &msg);
    }

    /// Log a success message.
    pub fn success(&self, message: &str) {
        let msg = MessagePrefix::Success.format(message);
        self.log(LogLevel::Info, &msg);
    }

    /// Record a line of external tool output.
    ///
    /// Lines only go to the tail buffer; call `show_tail` to print them.
    pub fn output_line(&self, line: &str) {
        let mut buffer = self.tail_buffer.lock();
        if self.config.error_tail == 0 {
            return;
        }
        if buffer.len() >= self.config.error_tail {
            buffer.pop_front();
        }
        buffer.push_back(line.to_string());
    }

    /// Show the tail buffer (typically after an error).
    pub fn show_tail(&self, header: &str) {
        let lines = self.get_tail();
        if lines.is_empty() {
            return;
        }

        self.output(&self.format_message(&format!("[{}/tail]", header)));
        for line in &lines {
            self.output(&self.format_message(line));
        }
    }

    /// Get the current tail buffer contents.
    pub fn get_tail(&self) -> Vec<String> {
        self.tail_buffer.lock().iter().cloned().collect()
    }

    /// Every line emitted so far, in order.
    pub fn lines(&self) -> Vec<String> {
        self.history.lock().clone()
    }

    /// Whether any emitted line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.history.lock().iter().any(|l| l.contains(needle))
    }

    /// Format a message with timestamp (if enabled).
    fn format_message(&self, message: &str) -> String {
        if self.config.show_timestamps {
            let timestamp = Local::now().format("%H:%M:%S");
            format!("[{}] {}", timestamp, message)
        } else {
            message.to_string()
        }
    }

    /// Output a formatted line to the sink and history.
    fn output(&self, formatted: &str) {
        tracing::trace!(run = %self.run_name, "{}", formatted);
        self.history.lock().push(formatted.to_string());
        (self.sink)(formatted);
    }
}

impl std::fmt::Debug for RunLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunLogger")
            .field("run_name", &self.run_name)
            .field("config", &self.config)
            .finish()
    }
}
