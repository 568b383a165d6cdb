//! Configuration for the bootstrap orchestrator.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Defaults that reproduce the fixed bootstrap layout when no file exists
//! - Atomic file writes (write to temp, then rename)
//!
//! # Example
//!
//! ```no_run
//! use oncotree_core::config::ConfigManager;
//!
//! let mut config = ConfigManager::new("oncotree-bootstrap.toml");
//! config.load_or_default().unwrap();
//!
//! println!("Virtualenv name: {}", config.settings().paths.venv_name);
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult, DEFAULT_CONFIG_FILE};
pub use settings::{ConverterSettings, LoggingSettings, PathSettings, PythonSettings, Settings};
