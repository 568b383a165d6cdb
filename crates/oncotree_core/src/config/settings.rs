//! Settings struct with TOML-based sections.
//!
//! Every field has a default, so an empty (or missing) config file yields
//! the standard layout: `./output`, `~/.venvs/oncotree-fhir`,
//! `requirements.txt`, `pip-log.txt` and a `convert-all` run.

use serde::{Deserialize, Serialize};

use crate::logging::{LogConfig, LogLevel};

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Filesystem layout.
    #[serde(default)]
    pub paths: PathSettings,

    /// Interpreter discovery.
    #[serde(default)]
    pub python: PythonSettings,

    /// The converter invocation.
    #[serde(default)]
    pub converter: ConverterSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Filesystem layout, relative paths resolve against the working directory
/// (or the home directory for `venv_root`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSettings {
    /// Directory the converter writes into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Parent of all virtual environments, relative to the home directory.
    #[serde(default = "default_venv_root")]
    pub venv_root: String,

    /// Name of this tool's virtual environment under `venv_root`.
    #[serde(default = "default_venv_name")]
    pub venv_name: String,

    /// Dependency manifest passed to pip.
    #[serde(default = "default_requirements")]
    pub requirements: String,

    /// Installer log, overwritten each run.
    #[serde(default = "default_pip_log")]
    pub pip_log: String,
}

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_venv_root() -> String {
    ".venvs".to_string()
}

fn default_venv_name() -> String {
    "oncotree-fhir".to_string()
}

fn default_requirements() -> String {
    "requirements.txt".to_string()
}

fn default_pip_log() -> String {
    "pip-log.txt".to_string()
}

impl Default for PathSettings {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            venv_root: default_venv_root(),
            venv_name: default_venv_name(),
            requirements: default_requirements(),
            pip_log: default_pip_log(),
        }
    }
}

/// Interpreter discovery settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PythonSettings {
    /// Interpreter looked up on the search path to create the venv.
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Interpreter name inside the activated venv.
    #[serde(default = "default_venv_python")]
    pub venv_python: String,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_venv_python() -> String {
    "python".to_string()
}

impl Default for PythonSettings {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            venv_python: default_venv_python(),
        }
    }
}

/// The converter command line.
///
/// `$version` in the templates is passed through literally; the converter
/// substitutes it per OncoTree release.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConverterSettings {
    /// Converter script run with the venv interpreter.
    #[serde(default = "default_script")]
    pub script: String,

    /// Value of `--output=`.
    #[serde(default = "default_output_template")]
    pub output_template: String,

    /// Pass `--write-tsv`.
    #[serde(default = "default_true")]
    pub write_tsv: bool,

    /// Value of `--tsv-output=`.
    #[serde(default = "default_tsv_output_template")]
    pub tsv_output_template: String,

    /// Subcommand.
    #[serde(default = "default_action")]
    pub action: String,
}

fn default_script() -> String {
    "oncotree-fhir.py".to_string()
}

fn default_output_template() -> String {
    "./output/$version.json".to_string()
}

fn default_tsv_output_template() -> String {
    "./output/$version.tsv".to_string()
}

fn default_action() -> String {
    "convert-all".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            script: default_script(),
            output_template: default_output_template(),
            write_tsv: true,
            tsv_output_template: default_tsv_output_template(),
            action: default_action(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum level for progress lines and the tracing fallback filter.
    #[serde(default)]
    pub level: LogLevel,

    /// Prefix progress lines with a timestamp.
    #[serde(default)]
    pub timestamps: bool,

    /// Lines of installer output shown when installation fails.
    #[serde(default = "default_error_tail")]
    pub error_tail: usize,
}

fn default_error_tail() -> usize {
    20
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            timestamps: false,
            error_tail: default_error_tail(),
        }
    }
}

impl LoggingSettings {
    /// Build the run logger configuration.
    pub fn to_log_config(&self) -> LogConfig {
        LogConfig {
            level: self.level,
            error_tail: self.error_tail,
            show_timestamps: self.timestamps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let settings: Settings = toml::from_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.paths.venv_name, "oncotree-fhir");
        assert_eq!(settings.converter.action, "convert-all");
        assert!(settings.converter.write_tsv);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let settings: Settings = toml::from_str("[paths]\nvenv_name = \"scratch\"\n").unwrap();
        assert_eq!(settings.paths.venv_name, "scratch");
        assert_eq!(settings.paths.venv_root, ".venvs");
        assert_eq!(settings.python.interpreter, "python3");
    }

    #[test]
    fn templates_keep_version_placeholder() {
        let converter = ConverterSettings::default();
        assert!(converter.output_template.contains("$version"));
        assert!(converter.tsv_output_template.contains("$version"));
    }

    #[test]
    fn logging_settings_convert_to_log_config() {
        let logging = LoggingSettings {
            level: LogLevel::Debug,
            timestamps: true,
            error_tail: 7,
        };
        let config = logging.to_log_config();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!(config.error_tail, 7);
        assert!(config.show_timestamps);
    }
}
