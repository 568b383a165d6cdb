//! Tumor type to CodeSystem concept conversion.

use serde::{Deserialize, Serialize};

use crate::oncotree::TumorType;

/// A `CodeSystem.concept.property` entry. Exactly one value is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConceptProperty {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_integer: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_code: Option<String>,
}

impl ConceptProperty {
    pub fn string(code: &str, value: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            value_string: Some(value.into()),
            value_integer: None,
            value_code: None,
        }
    }

    pub fn integer(code: &str, value: i64) -> Self {
        Self {
            code: code.to_string(),
            value_string: None,
            value_integer: Some(value),
            value_code: None,
        }
    }

    pub fn code(code: &str, value: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            value_string: None,
            value_integer: None,
            value_code: Some(value.into()),
        }
    }
}

/// A `CodeSystem.concept` entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub code: String,
    pub display: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub property: Vec<ConceptProperty>,
}

impl Concept {
    /// The property with `code`, if present.
    pub fn property(&self, code: &str) -> Option<&ConceptProperty> {
        self.property.iter().find(|p| p.code == code)
    }

    /// The `parent` code, if any.
    pub fn parent(&self) -> Option<&str> {
        self.property("parent").and_then(|p| p.value_code.as_deref())
    }
}

/// Convert one tumor type.
///
/// Property order: level, color, parent, umls, nci. Absent values are
/// omitted; multiple references are joined with `", "`.
pub fn convert_concept(tumor: &TumorType) -> Concept {
    let mut property = vec![ConceptProperty::integer("level", tumor.level)];

    if let Some(color) = &tumor.color {
        property.push(ConceptProperty::string("color", color.as_str()));
    }
    if let Some(parent) = &tumor.parent {
        property.push(ConceptProperty::code("parent", parent.as_str()));
    }
    for (source, code) in [("UMLS", "umls"), ("NCI", "nci")] {
        if let Some(refs) = tumor.references(source) {
            if !refs.is_empty() {
                property.push(ConceptProperty::string(code, refs.join(", ")));
            }
        }
    }

    Concept {
        code: tumor.code.clone(),
        display: tumor.name.clone(),
        property,
    }
}
