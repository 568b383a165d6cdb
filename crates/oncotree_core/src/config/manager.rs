//! Loading and saving `oncotree-bootstrap.toml`.
//!
//! The file is optional. A missing file means built-in defaults and is
//! never created by a load; `save` replaces it through a temp file.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::settings::Settings;

/// Config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "oncotree-bootstrap.toml";

/// Config file failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read bootstrap config: {0}")]
    ReadError(#[from] io::Error),

    #[error("Invalid bootstrap config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Cannot serialize bootstrap config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("No bootstrap config at {}", .0.display())]
    NotFound(PathBuf),
}

/// Result alias for config loading and saving.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages the bootstrap configuration.
#[derive(Debug)]
pub struct ConfigManager {
    config_path: PathBuf,
    settings: Settings,
}

impl ConfigManager {
    /// Manager for `config_path`, holding defaults until loaded.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Location of the config file.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Settings currently in memory.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// In-memory settings; persisted only by `save`.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Consume the manager, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Read the file, replacing the in-memory settings.
    ///
    /// Keys absent from the file keep their defaults.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.is_file() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let text = fs::read_to_string(&self.config_path)?;
        self.settings = toml::from_str(&text)?;
        Ok(())
    }

    /// Like `load`, but a missing file yields defaults.
    ///
    /// Returns whether a file was read.
    pub fn load_or_default(&mut self) -> ConfigResult<bool> {
        if self.config_path.is_file() {
            self.load()?;
            tracing::debug!("Loaded config from {}", self.config_path.display());
            Ok(true)
        } else {
            tracing::debug!(
                "No config at {}, using defaults",
                self.config_path.display()
            );
            self.settings = Settings::default();
            Ok(false)
        }
    }

    /// Write every setting to the file.
    pub fn save(&self) -> ConfigResult<()> {
        let body = toml::to_string_pretty(&self.settings)?;
        let text = format!(
            "# oncotree-bootstrap configuration\n\
             # Every key is optional; missing keys use the built-in defaults.\n\n{}",
            body
        );

        self.replace_file(&text)?;
        Ok(())
    }

    /// Write `text` next to the config file, then rename it into place.
    fn replace_file(&self, text: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Same directory, so the rename is atomic
        let staging = self.config_path.with_extension("toml.tmp");

        let mut file = fs::File::create(&staging)?;
        file.write_all(text.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&staging, &self.config_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn load_or_default_does_not_create_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut manager = ConfigManager::new(&config_path);
        let found = manager.load_or_default().unwrap();

        assert!(!found);
        assert!(!config_path.exists());
        assert_eq!(manager.settings(), &Settings::default());
    }

    #[test]
    fn load_reads_existing_values() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);

        fs::write(&config_path, "[paths]\noutput_dir = \"fhir_out\"\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        assert!(manager.load_or_default().unwrap());
        assert_eq!(manager.settings().paths.output_dir, "fhir_out");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("absent.toml"));
        assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(DEFAULT_CONFIG_FILE);
        fs::write(&config_path, "[paths\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        assert!(matches!(manager.load(), Err(ConfigError::ParseError(_))));
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nested").join(DEFAULT_CONFIG_FILE);

        let mut manager = ConfigManager::new(&config_path);
        manager.settings_mut().converter.write_tsv = false;
        manager.save().unwrap();

        assert!(!config_path.with_extension("toml.tmp").exists());

        let mut reloaded = ConfigManager::new(&config_path);
        reloaded.load().unwrap();
        assert!(!reloaded.settings().converter.write_tsv);
        assert_eq!(reloaded.into_settings().paths.venv_name, "oncotree-fhir");
    }
}
