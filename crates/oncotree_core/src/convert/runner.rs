//! Runs a converter action against the API.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::args::{Action, ConvertArgs};
use super::error::{ConvertError, ConvertResult};
use super::json::to_ascii_json;
use super::paths::expand_output_path;
use super::tree::render_version_tree;
use crate::fhir::{build_code_system, convert_concept, write_tsv, CodeSystem};
use crate::logging::RunLogger;
use crate::oncotree::{release_date_for, OncoTreeClient, VersionInfo};

/// Files written for one release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOutput {
    pub version: String,
    pub json_path: PathBuf,
    pub tsv_path: Option<PathBuf>,
    pub concept_count: usize,
}

/// Converter bound to one set of arguments.
pub struct Converter {
    args: ConvertArgs,
    client: OncoTreeClient,
    home: PathBuf,
    cwd: PathBuf,
    logger: Arc<RunLogger>,
}

impl Converter {
    /// `home` and `cwd` are used to expand output templates.
    pub fn new(
        args: ConvertArgs,
        home: impl Into<PathBuf>,
        cwd: impl Into<PathBuf>,
        logger: Arc<RunLogger>,
    ) -> Self {
        let client = OncoTreeClient::new(&args.url);
        Self {
            args,
            client,
            home: home.into(),
            cwd: cwd.into(),
            logger,
        }
    }

    pub fn args(&self) -> &ConvertArgs {
        &self.args
    }

    /// Fetch the release list, validate the arguments and run the action.
    pub async fn run(&self) -> ConvertResult<Vec<ConversionOutput>> {
        let versions = self.client.versions().await?;
        self.args.validate(&versions)?;

        match self.args.action {
            Action::Versions => {
                for line in render_version_tree(self.client.base_url(), &versions) {
                    self.logger.info(&line);
                }
                Ok(Vec::new())
            }
            Action::Convert => {
                let output = self.convert_version(&self.args.version, &versions).await?;
                Ok(vec![output])
            }
            Action::ConvertAll => {
                let mut outputs = Vec::with_capacity(versions.len());
                for version in &versions {
                    self.logger
                        .phase(&format!("Getting version {}", version.api_identifier));
                    outputs.push(self.convert_version(&version.api_identifier, &versions).await?);
                }
                Ok(outputs)
            }
        }
    }

    /// Convert and write one release.
    pub async fn convert_version(
        &self,
        version: &str,
        versions: &[VersionInfo],
    ) -> ConvertResult<ConversionOutput> {
        let release_date =
            release_date_for(versions, version).ok_or_else(|| ConvertError::UnknownVersion {
                version: version.to_string(),
                url: self.args.url.clone(),
            })?;

        let mut code_system =
            build_code_system(version, release_date, &self.args.code_system_options());
        self.logger.info(&format!(
            "getting {} (released {}) from {}",
            code_system.version,
            release_date,
            self.client.tumor_types_endpoint(version)
        ));

        let tumors = self.client.tumor_types(version).await?;
        self.logger.debug("Converting concepts...");
        code_system.concept = tumors.iter().map(convert_concept).collect();

        let json = expand_output_path(&self.args.output, version, &self.home, &self.cwd);
        let json_target = self.cwd.join(&json.filepath);
        write_code_system(&json_target, &code_system)?;
        self.logger
            .success(&format!("Wrote output to {}", json.filepath.display()));

        let tsv_path = if self.args.write_tsv {
            let tsv = expand_output_path(&self.args.tsv_output, version, &self.home, &self.cwd);
            let tsv_target = self.cwd.join(&tsv.filepath);
            write_tsv(&tsv_target, &code_system).map_err(|e| ConvertError::Write {
                path: tsv_target.clone(),
                source: e,
            })?;
            self.logger.success(&format!("wrote TSV to {}", tsv.filename));
            Some(tsv_target)
        } else {
            None
        };

        Ok(ConversionOutput {
            version: version.to_string(),
            json_path: json_target,
            tsv_path,
            concept_count: code_system.concept.len(),
        })
    }
}

/// Write `code_system` as JSON with two-space indentation.
pub fn write_code_system(path: &Path, code_system: &CodeSystem) -> ConvertResult<()> {
    let json = to_ascii_json(code_system)?;
    fs::write(path, json).map_err(|e| ConvertError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}
