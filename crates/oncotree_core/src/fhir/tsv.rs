//! Flat `code / label / parent` export.

use std::fs;
use std::io;
use std::path::Path;

use super::codesystem::CodeSystem;

const DELIMITER: char = '\t';
const LINE_END: &str = "\r\n";

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TsvRow {
    pub code: String,
    pub label: String,
    pub parent: Option<String>,
}

/// Rows for every concept, sorted by code.
pub fn tsv_rows(code_system: &CodeSystem) -> Vec<TsvRow> {
    let mut rows: Vec<TsvRow> = code_system
        .concept
        .iter()
        .map(|c| TsvRow {
            code: c.code.clone(),
            label: c.display.clone(),
            parent: c.parent().map(str::to_string),
        })
        .collect();
    rows.sort_by(|a, b| a.code.cmp(&b.code));
    rows
}

/// Render rows without a header. A field is quoted only if it contains the
/// delimiter, a quote or a line break; quotes inside are doubled.
pub fn render_tsv(rows: &[TsvRow]) -> String {
    let mut out = String::new();
    for row in rows {
        let fields = [
            quote_field(&row.code),
            quote_field(&row.label),
            quote_field(row.parent.as_deref().unwrap_or("")),
        ];
        out.push_str(&fields.join(&DELIMITER.to_string()));
        out.push_str(LINE_END);
    }
    out
}

/// Write the TSV export of `code_system` to `path`.
pub fn write_tsv(path: &Path, code_system: &CodeSystem) -> io::Result<()> {
    fs::write(path, render_tsv(&tsv_rows(code_system)))
}

fn quote_field(value: &str) -> String {
    if value.contains([DELIMITER, '"', '\r', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fhir::{build_code_system, CodeSystemOptions, Concept, ConceptProperty};
    use tempfile::tempdir;

    fn concept(code: &str, display: &str, parent: Option<&str>) -> Concept {
        let mut property = vec![ConceptProperty::integer("level", 1)];
        if let Some(p) = parent {
            property.push(ConceptProperty::code("parent", p));
        }
        Concept {
            code: code.to_string(),
            display: display.to_string(),
            property,
        }
    }

    fn code_system() -> CodeSystem {
        let mut cs = build_code_system("oncotree_2021_11_02", "2021-11-02", &CodeSystemOptions::default());
        cs.concept = vec![
            concept("TISSUE", "Tissue", None),
            concept("BOWEL", "Bowel", Some("TISSUE")),
            concept("COADREAD", "Colorectal \"Adeno\"carcinoma", Some("BOWEL")),
        ];
        cs
    }

    #[test]
    fn rows_sorted_by_code() {
        let rows = tsv_rows(&code_system());
        let codes: Vec<_> = rows.iter().map(|r| r.code.as_str()).collect();
        assert_eq!(codes, vec!["BOWEL", "COADREAD", "TISSUE"]);
        assert_eq!(rows[2].parent, None);
    }

    #[test]
    fn renders_with_minimal_quoting() {
        let text = render_tsv(&tsv_rows(&code_system()));
        assert_eq!(
            text,
            "BOWEL\tBowel\tTISSUE\r\n\
             COADREAD\t\"Colorectal \"\"Adeno\"\"carcinoma\"\tBOWEL\r\n\
             TISSUE\tTissue\t\r\n"
        );
    }

    #[test]
    fn writes_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("20211102.tsv");
        write_tsv(&path, &code_system()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("BOWEL\t"));
        assert_eq!(text.matches("\r\n").count(), 3);
    }
}
