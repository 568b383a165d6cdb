//! Interpreter discovery on the injected search path.

use std::path::PathBuf;

use super::error::{BootstrapError, BootstrapResult};
use super::host::HostEnv;

/// Locate `name` on the host's search path.
///
/// Only `host.search_path` is consulted, never the process `PATH`.
pub fn discover_interpreter(name: &str, host: &HostEnv) -> BootstrapResult<PathBuf> {
    match which::which_in(name, Some(&host.search_path), &host.cwd) {
        Ok(path) => {
            tracing::debug!("Found {} at {}", name, path.display());
            Ok(path)
        }
        Err(e) => {
            tracing::debug!("{} lookup failed: {}", name, e);
            Err(BootstrapError::InterpreterNotFound {
                name: name.to_string(),
                search_path: host.search_path.clone(),
            })
        }
    }
}
