//! Snapshot of the ambient process environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use super::error::{BootstrapError, BootstrapResult};

/// The parts of the process environment the bootstrap reads.
///
/// Captured once at startup and passed down explicitly; nothing in the
/// bootstrap reads `HOME`, `PATH` or the working directory on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostEnv {
    /// Operating system identifier (`linux`, `macos`, ...).
    pub os: String,
    /// Home directory; the virtualenv root lives below it.
    pub home_dir: PathBuf,
    /// Executable search path, `PATH` syntax.
    pub search_path: OsString,
    /// Working directory relative paths resolve against.
    pub cwd: PathBuf,
}

impl HostEnv {
    /// Build a host environment from explicit values.
    pub fn new(
        os: impl Into<String>,
        home_dir: impl Into<PathBuf>,
        search_path: impl Into<OsString>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            os: os.into(),
            home_dir: home_dir.into(),
            search_path: search_path.into(),
            cwd: cwd.into(),
        }
    }

    /// Capture the current process environment.
    pub fn from_process() -> BootstrapResult<Self> {
        let home_dir = BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or(BootstrapError::NoHomeDir)?;
        let search_path = env::var_os("PATH").unwrap_or_default();
        let cwd = env::current_dir()?;

        Ok(Self::new(env::consts::OS, home_dir, search_path, cwd))
    }

    /// Resolve a possibly relative path against the working directory.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }

    /// Resolve a possibly relative path against the home directory.
    pub fn resolve_in_home(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.home_dir.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_paths() {
        let host = HostEnv::new("linux", "/home/ana", "/usr/bin", "/work");
        assert_eq!(host.resolve("output"), PathBuf::from("/work/output"));
        assert_eq!(host.resolve("/abs/output"), PathBuf::from("/abs/output"));
        assert_eq!(host.resolve_in_home(".venvs"), PathBuf::from("/home/ana/.venvs"));
    }

    #[test]
    fn from_process_reports_current_os() {
        if let Ok(host) = HostEnv::from_process() {
            assert_eq!(host.os, env::consts::OS);
            assert!(host.cwd.is_absolute());
        }
    }
}
