//! Output file naming.

use std::path::{Component, Path, PathBuf};

/// Token in output templates replaced by the release identifier.
pub const VERSION_PLACEHOLDER: &str = "$version";

/// An expanded output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPath {
    /// Template after `~` expansion and `$version` substitution.
    pub filename: String,
    /// Where the file is written: `filename` itself for files in the
    /// working directory, otherwise the absolute path.
    pub filepath: PathBuf,
}

/// Expand `template` for `version`.
pub fn expand_output_path(template: &str, version: &str, home: &Path, cwd: &Path) -> OutputPath {
    let filename = shellexpand::tilde_with_context(template, || Some(home.display().to_string()))
        .replace(VERSION_PLACEHOLDER, version);

    let cwd = normalize(cwd);
    let absolute = normalize(&cwd.join(&filename));
    let in_cwd = absolute.parent().is_some_and(|dir| dir == cwd);

    let filepath = if in_cwd {
        PathBuf::from(&filename)
    } else {
        absolute
    };

    OutputPath { filename, filepath }
}

/// Lexically resolve `.` and `..` components.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &str = "/home/user";
    const CWD: &str = "/work/oncotree";

    fn expand(template: &str) -> OutputPath {
        expand_output_path(template, "oncotree_2021_11_02", Path::new(HOME), Path::new(CWD))
    }

    #[test]
    fn file_in_cwd_keeps_relative_name() {
        let out = expand("./$version.json");
        assert_eq!(out.filename, "./oncotree_2021_11_02.json");
        assert_eq!(out.filepath, PathBuf::from("./oncotree_2021_11_02.json"));

        let bare = expand("$version.tsv");
        assert_eq!(bare.filepath, PathBuf::from("oncotree_2021_11_02.tsv"));
    }

    #[test]
    fn subdirectory_becomes_absolute() {
        let out = expand("./output/$version.json");
        assert_eq!(out.filename, "./output/oncotree_2021_11_02.json");
        assert_eq!(
            out.filepath,
            PathBuf::from("/work/oncotree/output/oncotree_2021_11_02.json")
        );
    }

    #[test]
    fn parent_components_are_resolved() {
        let out = expand("../out/$version.json");
        assert_eq!(out.filepath, PathBuf::from("/work/out/oncotree_2021_11_02.json"));

        let back_in = expand("sub/../$version.json");
        assert_eq!(back_in.filepath, PathBuf::from("sub/../oncotree_2021_11_02.json"));
    }

    #[test]
    fn home_is_expanded() {
        let out = expand("~/fhir/$version.json");
        assert_eq!(out.filename, "/home/user/fhir/oncotree_2021_11_02.json");
        assert_eq!(
            out.filepath,
            PathBuf::from("/home/user/fhir/oncotree_2021_11_02.json")
        );
    }

    #[test]
    fn only_a_leading_bare_tilde_is_expanded() {
        assert_eq!(expand("~").filename, HOME);
        assert_eq!(expand("~other/$version.json").filename, "~other/oncotree_2021_11_02.json");
        assert_eq!(expand("out/~/$version.json").filename, "out/~/oncotree_2021_11_02.json");
    }

    #[test]
    fn every_placeholder_is_replaced() {
        let out = expand("/tmp/$version/$version.json");
        assert_eq!(
            out.filename,
            "/tmp/oncotree_2021_11_02/oncotree_2021_11_02.json"
        );
    }
}
