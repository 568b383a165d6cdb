//! CodeSystem resource and its header fields.

use serde::{Deserialize, Serialize};

use super::concept::Concept;

/// Default canonical URL of the CodeSystem.
pub const DEFAULT_CANONICAL: &str = "http://oncotree.mskcc.org/fhir/CodeSystem";
/// Default canonical URL of the all-codes ValueSet.
pub const DEFAULT_VALUESET: &str = "http://oncotree.mskcc.org/fhir/ValueSet";

/// Moving releases. Their content changes over time, so they get a
/// separate canonical.
pub const SNAPSHOT_VERSIONS: [&str; 4] = [
    "oncotree_latest_stable",
    "oncotree_candidate_release",
    "oncotree_development",
    "oncotree_legacy_1.1",
];

/// Whether `api_identifier` names a moving release.
pub fn is_snapshot(api_identifier: &str) -> bool {
    SNAPSHOT_VERSIONS.contains(&api_identifier)
}

/// Canonical URLs used when building a CodeSystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSystemOptions {
    pub canonical: String,
    pub valueset: String,
}

impl CodeSystemOptions {
    pub fn new(canonical: &str, valueset: &str) -> Self {
        Self {
            canonical: canonical.trim_end_matches('/').to_string(),
            valueset: valueset.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for CodeSystemOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CANONICAL, DEFAULT_VALUESET)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Integer,
    Code,
}

/// A `CodeSystem.property` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDefinition {
    pub code: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: PropertyType,
}

impl PropertyDefinition {
    fn new(code: &str, description: &str, kind: PropertyType) -> Self {
        Self {
            code: code.to_string(),
            description: description.to_string(),
            kind,
        }
    }
}

/// FHIR `CodeSystem` resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSystem {
    pub resource_type: String,
    pub id: String,
    pub url: String,
    pub value_set: String,
    pub version: String,
    pub name: String,
    pub title: String,
    pub status: String,
    pub date: String,
    pub hierarchy_meaning: String,
    pub content: String,
    pub property: Vec<PropertyDefinition>,
    #[serde(default)]
    pub concept: Vec<Concept>,
}

impl CodeSystem {
    /// Look up a concept by code.
    pub fn find(&self, code: &str) -> Option<&Concept> {
        self.concept.iter().find(|c| c.code == code)
    }
}

/// Build the CodeSystem header for one release. Concepts are added by
/// the caller.
pub fn build_code_system(
    version_id: &str,
    release_date: &str,
    options: &CodeSystemOptions,
) -> CodeSystem {
    let (version, url, value_set, name, title) = if is_snapshot(version_id) {
        (
            version_id.replace('_', "-"),
            format!("{}/snapshot", options.canonical),
            format!("{}/snapshot", options.valueset),
            "oncotree-snapshot",
            "OncoTree Snapshot",
        )
    } else {
        (
            version_id.replace("oncotree_", "").replace('_', ""),
            options.canonical.clone(),
            options.valueset.clone(),
            "oncotree",
            "OncoTree",
        )
    };

    CodeSystem {
        resource_type: "CodeSystem".to_string(),
        id: version.replace('_', "-"),
        url,
        value_set,
        version,
        name: name.to_string(),
        title: title.to_string(),
        status: "draft".to_string(),
        date: release_date.to_string(),
        hierarchy_meaning: "is-a".to_string(),
        content: "complete".to_string(),
        property: vec![
            PropertyDefinition::new(
                "color",
                "Color in the Oncotree Visualisation",
                PropertyType::String,
            ),
            PropertyDefinition::new(
                "level",
                "Level in the Oncotree hierarchy",
                PropertyType::Integer,
            ),
            PropertyDefinition::new("umls", "Linked UMLS concept", PropertyType::String),
            PropertyDefinition::new("nci", "Linked NCI concept", PropertyType::String),
        ],
        concept: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dated_release_naming() {
        let cs = build_code_system(
            "oncotree_2021_11_02",
            "2021-11-02",
            &CodeSystemOptions::default(),
        );
        assert_eq!(cs.version, "20211102");
        assert_eq!(cs.id, "20211102");
        assert_eq!(cs.name, "oncotree");
        assert_eq!(cs.title, "OncoTree");
        assert_eq!(cs.url, DEFAULT_CANONICAL);
        assert_eq!(cs.value_set, DEFAULT_VALUESET);
        assert_eq!(cs.date, "2021-11-02");
    }

    #[test]
    fn snapshot_release_naming() {
        let cs = build_code_system(
            "oncotree_latest_stable",
            "2021-11-02",
            &CodeSystemOptions::default(),
        );
        assert_eq!(cs.version, "oncotree-latest-stable");
        assert_eq!(cs.id, "oncotree-latest-stable");
        assert_eq!(cs.name, "oncotree-snapshot");
        assert_eq!(cs.title, "OncoTree Snapshot");
        assert_eq!(cs.url, "http://oncotree.mskcc.org/fhir/CodeSystem/snapshot");
        assert_eq!(cs.value_set, "http://oncotree.mskcc.org/fhir/ValueSet/snapshot");

        let legacy = build_code_system("oncotree_legacy_1.1", "2017-01-01", &CodeSystemOptions::default());
        assert_eq!(legacy.version, "oncotree-legacy-1.1");
    }

    #[test]
    fn custom_canonicals_are_trimmed() {
        let opts = CodeSystemOptions::new("http://example.org/cs/", "http://example.org/vs/");
        let cs = build_code_system("oncotree_development", "2022-01-01", &opts);
        assert_eq!(cs.url, "http://example.org/cs/snapshot");
        assert_eq!(cs.value_set, "http://example.org/vs/snapshot");
    }

    #[test]
    fn header_serializes_as_fhir_json() {
        let cs = build_code_system("oncotree_2019_12_01", "2019-12-01", &CodeSystemOptions::default());
        let json = serde_json::to_value(&cs).unwrap();

        assert_eq!(json["resourceType"], "CodeSystem");
        assert_eq!(json["valueSet"], DEFAULT_VALUESET);
        assert_eq!(json["hierarchyMeaning"], "is-a");
        assert_eq!(json["status"], "draft");
        assert_eq!(json["content"], "complete");
        let props = json["property"].as_array().unwrap();
        let codes: Vec<_> = props.iter().map(|p| p["code"].as_str().unwrap()).collect();
        assert_eq!(codes, vec!["color", "level", "umls", "nci"]);
        assert_eq!(props[1]["type"], "integer");
    }
}
