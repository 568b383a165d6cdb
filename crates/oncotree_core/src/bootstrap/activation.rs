//! Scoped virtualenv activation.
//!
//! `source bin/activate` mutates the calling shell. Here activation is a
//! value: it owns the environment overrides and applies them to each
//! child process built through it. Dropping it ends the activation.

use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::{BootstrapError, BootstrapResult};
use super::host::HostEnv;
use super::layout::BootstrapPaths;

/// An activated virtual environment.
#[derive(Debug)]
pub struct ActivatedEnv {
    venv_dir: PathBuf,
    bin_dir: PathBuf,
    python: PathBuf,
    search_path: OsString,
    cwd: PathBuf,
}

impl ActivatedEnv {
    /// Activate the venv described by `paths`.
    ///
    /// Prepends the venv executable directory to the host search path.
    /// Fails if the venv has no interpreter of its own.
    pub fn activate(paths: &BootstrapPaths, host: &HostEnv) -> BootstrapResult<Self> {
        if !paths.venv_python.is_file() {
            return Err(BootstrapError::BrokenVenv(paths.venv_dir.clone()));
        }

        let mut entries = vec![paths.venv_bin.clone()];
        entries.extend(env::split_paths(&host.search_path));
        let search_path = env::join_paths(entries).map_err(|e| {
            BootstrapError::Io(std::io::Error::new(std::io::ErrorKind::InvalidInput, e))
        })?;

        tracing::debug!("Activated {}", paths.venv_dir.display());

        Ok(Self {
            venv_dir: paths.venv_dir.clone(),
            bin_dir: paths.venv_bin.clone(),
            python: paths.venv_python.clone(),
            search_path,
            cwd: host.cwd.clone(),
        })
    }

    /// The venv root (value of `VIRTUAL_ENV`).
    pub fn venv_dir(&self) -> &Path {
        &self.venv_dir
    }

    /// The venv executable directory.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }

    /// Search path with the venv executable directory first.
    pub fn search_path(&self) -> &OsStr {
        &self.search_path
    }

    /// The venv's interpreter. Always inside the venv, never looked up on
    /// the search path.
    pub fn python(&self) -> &Path {
        &self.python
    }

    /// Build a command that runs inside the activated environment.
    ///
    /// Sets `PATH` and `VIRTUAL_ENV`, clears `PYTHONHOME`, and runs in the
    /// host working directory.
    pub fn command(&self, program: impl AsRef<OsStr>) -> Command {
        let mut cmd = Command::new(program);
        cmd.env("PATH", &self.search_path)
            .env("VIRTUAL_ENV", &self.venv_dir)
            .env_remove("PYTHONHOME")
            .current_dir(&self.cwd);
        cmd
    }
}

impl Drop for ActivatedEnv {
    fn drop(&mut self) {
        tracing::debug!("Deactivated {}", self.venv_dir.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use std::fs;
    use tempfile::tempdir;

    fn layout(dir: &Path) -> (HostEnv, BootstrapPaths) {
        let host = HostEnv::new("linux", dir.join("home"), "/usr/bin:/bin", dir);
        let paths = BootstrapPaths::new(&host, &Settings::default());
        (host, paths)
    }

    fn with_python(paths: &BootstrapPaths) {
        fs::create_dir_all(&paths.venv_bin).unwrap();
        fs::write(&paths.venv_python, "#!/bin/sh\n").unwrap();
    }

    #[test]
    fn activation_requires_venv_interpreter() {
        let dir = tempdir().unwrap();
        let (host, paths) = layout(dir.path());
        fs::create_dir_all(&paths.venv_dir).unwrap();

        let err = ActivatedEnv::activate(&paths, &host).unwrap_err();
        assert!(matches!(err, BootstrapError::BrokenVenv(_)));

        // A bare bin directory is not enough either
        fs::create_dir_all(&paths.venv_bin).unwrap();
        let err = ActivatedEnv::activate(&paths, &host).unwrap_err();
        assert!(matches!(err, BootstrapError::BrokenVenv(_)));
    }

    #[test]
    fn venv_bin_comes_first_on_search_path() {
        let dir = tempdir().unwrap();
        let (host, paths) = layout(dir.path());
        with_python(&paths);

        let active = ActivatedEnv::activate(&paths, &host).unwrap();
        let entries: Vec<PathBuf> = env::split_paths(active.search_path()).collect();

        assert_eq!(entries[0], paths.venv_bin);
        assert_eq!(entries[1], PathBuf::from("/usr/bin"));
        assert_eq!(entries.len(), 3);
        assert_eq!(active.venv_dir(), paths.venv_dir);
        assert_eq!(active.bin_dir(), paths.venv_bin);
    }

    #[test]
    fn command_carries_activation_env() {
        let dir = tempdir().unwrap();
        let (host, paths) = layout(dir.path());
        with_python(&paths);

        let active = ActivatedEnv::activate(&paths, &host).unwrap();
        let cmd = active.command("python");
        let envs: Vec<(&OsStr, Option<&OsStr>)> = cmd.get_envs().collect();

        assert!(envs.contains(&(OsStr::new("VIRTUAL_ENV"), Some(paths.venv_dir.as_os_str()))));
        assert!(envs.contains(&(OsStr::new("PYTHONHOME"), None)));
        assert!(envs
            .iter()
            .any(|(k, v)| *k == "PATH" && *v == Some(active.search_path())));
        assert_eq!(cmd.get_current_dir(), Some(dir.path()));
    }

    #[test]
    fn python_is_the_venv_interpreter() {
        let dir = tempdir().unwrap();
        let (host, paths) = layout(dir.path());
        with_python(&paths);

        let active = ActivatedEnv::activate(&paths, &host).unwrap();
        assert_eq!(active.python(), paths.venv_python);
        assert!(active.python().starts_with(active.bin_dir()));
    }
}
