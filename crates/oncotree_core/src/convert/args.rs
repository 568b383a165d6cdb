//! Converter arguments and their validation.

use std::fmt;
use std::str::FromStr;

use super::error::{ConvertError, ConvertResult};
use super::paths::VERSION_PLACEHOLDER;
use crate::fhir::{CodeSystemOptions, DEFAULT_CANONICAL, DEFAULT_VALUESET};
use crate::oncotree::{VersionInfo, DEFAULT_API_URL};

/// Release converted when none is given.
pub const DEFAULT_VERSION: &str = "oncotree_latest_stable";

/// What the converter does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    /// Print the release tree.
    Versions,
    /// Convert the selected release.
    #[default]
    Convert,
    /// Convert every release, newest first.
    ConvertAll,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Versions => "versions",
            Action::Convert => "convert",
            Action::ConvertAll => "convert-all",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "versions" => Ok(Action::Versions),
            "convert" => Ok(Action::Convert),
            "convert-all" => Ok(Action::ConvertAll),
            other => Err(format!(
                "invalid action '{}' (choose from 'versions', 'convert', 'convert-all')",
                other
            )),
        }
    }
}

/// Parsed converter arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertArgs {
    pub version: String,
    /// API base URL, without a trailing `/`.
    pub url: String,
    /// JSON output template.
    pub output: String,
    pub canonical: String,
    pub valueset: String,
    pub write_tsv: bool,
    /// TSV output template.
    pub tsv_output: String,
    pub action: Action,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            url: DEFAULT_API_URL.to_string(),
            output: "./$version.json".to_string(),
            canonical: DEFAULT_CANONICAL.to_string(),
            valueset: DEFAULT_VALUESET.to_string(),
            write_tsv: false,
            tsv_output: "./$version.tsv".to_string(),
            action: Action::default(),
        }
    }
}

impl ConvertArgs {
    /// One ` - name: value` line per argument.
    pub fn describe(&self) -> Vec<String> {
        vec![
            format!(" - version: {}", self.version),
            format!(" - url: {}", self.url),
            format!(" - output: {}", self.output),
            format!(" - canonical: {}", self.canonical),
            format!(" - valueset: {}", self.valueset),
            format!(" - write_tsv: {}", self.write_tsv),
            format!(" - tsv_output: {}", self.tsv_output),
            format!(" - action: {}", self.action),
        ]
    }

    /// Check the arguments against the releases the endpoint lists.
    ///
    /// The selected version must be listed, even for `versions` and
    /// `convert-all`. `convert-all` also needs `$version` in `output`.
    pub fn validate(&self, versions: &[VersionInfo]) -> ConvertResult<()> {
        if !versions.iter().any(|v| v.api_identifier == self.version) {
            return Err(ConvertError::UnknownVersion {
                version: self.version.clone(),
                url: self.url.clone(),
            });
        }

        if self.action == Action::ConvertAll && !self.output.contains(VERSION_PLACEHOLDER) {
            return Err(ConvertError::MissingVersionPlaceholder);
        }

        Ok(())
    }

    /// Canonical URLs for the generated CodeSystems.
    pub fn code_system_options(&self) -> CodeSystemOptions {
        CodeSystemOptions::new(&self.canonical, &self.valueset)
    }
}
