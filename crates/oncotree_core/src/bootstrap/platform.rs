//! Supported host platforms.

use std::fmt;

use super::error::{BootstrapError, BootstrapResult};

/// Platforms the bootstrap runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
}

impl Platform {
    /// Parse an OS identifier.
    ///
    /// Accepts Rust's `std::env::consts::OS` names as well as `uname -s`
    /// output (`Linux`, `Darwin`), case-insensitively.
    pub fn from_identifier(os: &str) -> BootstrapResult<Self> {
        match os.trim().to_ascii_lowercase().as_str() {
            "linux" => Ok(Self::Linux),
            "macos" | "darwin" => Ok(Self::MacOs),
            _ => Err(BootstrapError::UnsupportedPlatform(os.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::MacOs => write!(f, "macOS"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_identifiers() {
        for id in ["linux", "Linux", "macos", "Darwin", "darwin"] {
            assert!(Platform::from_identifier(id).is_ok(), "{id} should be supported");
        }
        assert_eq!(Platform::from_identifier("Darwin").unwrap(), Platform::MacOs);
    }

    #[test]
    fn rejects_other_identifiers() {
        for id in ["windows", "freebsd", "MINGW64_NT-10.0", ""] {
            let err = Platform::from_identifier(id).unwrap_err();
            assert!(matches!(err, BootstrapError::UnsupportedPlatform(_)));
            assert_eq!(err.exit_code(), 1);
        }
    }
}
