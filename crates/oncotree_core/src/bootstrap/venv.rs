//! Directory ensures and virtualenv creation.

use std::fs;
use std::path::Path;
use std::process::Command;

use super::error::{BootstrapError, BootstrapResult};
use super::layout::BootstrapPaths;

/// Create `path` (and parents) if it does not exist.
///
/// Returns `true` if the directory was created by this call.
pub fn ensure_dir(path: &Path) -> BootstrapResult<bool> {
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| BootstrapError::CreateDir {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(true)
}

/// Whether the virtualenv is fully set up: its interpreter and pip are
/// both present. A bare or half-written venv directory is not ready.
pub fn venv_ready(paths: &BootstrapPaths) -> bool {
    paths.venv_python.is_file() && paths.venv_pip.is_file()
}

/// Create a virtualenv with `<interpreter> -m venv <venv_dir>`.
///
/// `venv_dir` may already exist; missing pieces are filled in.
pub fn create_venv(interpreter: &Path, venv_dir: &Path) -> BootstrapResult<()> {
    tracing::info!("Creating virtual environment at {:?}", venv_dir);

    let output = Command::new(interpreter)
        .arg("-m")
        .arg("venv")
        .arg(venv_dir)
        .output()
        .map_err(|e| BootstrapError::Spawn {
            program: interpreter.display().to_string(),
            source: e,
        })?;

    if !output.status.success() {
        return Err(BootstrapError::CreateVenv {
            path: venv_dir.to_path_buf(),
            message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
