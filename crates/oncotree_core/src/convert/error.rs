//! Error types for the converter.

use std::path::PathBuf;

use thiserror::Error;

use crate::oncotree::ApiError;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(
        "version '{version}' is not known to the endpoint {url}. \
         Use the 'versions' operation to list the available versions"
    )]
    UnknownVersion { version: String, url: String },

    #[error(
        "When converting all the available versions of OncoTree, the '--output' \
         parameter must contain a placeholder '$version' that is replaced with \
         the respective version string."
    )]
    MissingVersionPlaceholder,

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize CodeSystem: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ConvertError {
    /// Process exit code: 2 for invalid arguments, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::UnknownVersion { .. } | ConvertError::MissingVersionPlaceholder => 2,
            _ => 1,
        }
    }
}

/// Result type for conversion.
pub type ConvertResult<T> = Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let err = ConvertError::UnknownVersion {
            version: "oncotree_1999".into(),
            url: "http://oncotree.mskcc.org/api".into(),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err
            .to_string()
            .starts_with("version 'oncotree_1999' is not known to the endpoint http://oncotree.mskcc.org/api."));
        assert_eq!(ConvertError::MissingVersionPlaceholder.exit_code(), 2);
    }

    #[test]
    fn write_errors_exit_with_one() {
        let err = ConvertError::Write {
            path: PathBuf::from("/x.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("/x.json"));
    }
}
