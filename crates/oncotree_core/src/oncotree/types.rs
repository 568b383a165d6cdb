//! OncoTree API payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One release listed by `/versions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Identifier used in API calls (e.g., `oncotree_2021_11_02`).
    pub api_identifier: String,
    /// ISO 8601 date, `YYYY-MM-DD`.
    pub release_date: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the release is listed as current.
    #[serde(default)]
    pub visible: bool,
}

/// One node from `/tumorTypes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TumorType {
    pub code: String,
    pub name: String,
    /// Depth in the hierarchy; the root tissue nodes are level 1.
    pub level: i64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub parent: Option<String>,
    /// Linked concepts keyed by source (`UMLS`, `NCI`).
    #[serde(default)]
    pub external_references: BTreeMap<String, Vec<String>>,
}

impl TumorType {
    /// References for one source, if any.
    pub fn references(&self, source: &str) -> Option<&[String]> {
        self.external_references.get(source).map(Vec::as_slice)
    }
}
