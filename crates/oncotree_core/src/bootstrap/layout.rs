//! Filesystem layout of a bootstrap run.

use std::path::PathBuf;

use super::host::HostEnv;
use crate::config::Settings;

/// Paths to everything the bootstrap creates or reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapPaths {
    /// Output directory for the converter (e.g., ./output)
    pub output_dir: PathBuf,
    /// Parent of all virtual environments (e.g., ~/.venvs)
    pub venv_root: PathBuf,
    /// This tool's virtual environment (e.g., ~/.venvs/oncotree-fhir)
    pub venv_dir: PathBuf,
    /// Executable directory inside the venv
    pub venv_bin: PathBuf,
    /// The venv's own interpreter
    pub venv_python: PathBuf,
    /// The venv's pip entry point
    pub venv_pip: PathBuf,
    /// Dependency manifest
    pub requirements: PathBuf,
    /// Installer log
    pub pip_log: PathBuf,
}

impl BootstrapPaths {
    pub fn new(host: &HostEnv, settings: &Settings) -> Self {
        let paths = &settings.paths;
        let venv_root = host.resolve_in_home(&paths.venv_root);
        let venv_dir = venv_root.join(&paths.venv_name);

        #[cfg(not(windows))]
        let (venv_bin, exe_suffix) = (venv_dir.join("bin"), "");
        #[cfg(windows)]
        let (venv_bin, exe_suffix) = (venv_dir.join("Scripts"), ".exe");

        let venv_python = venv_bin.join(format!("{}{}", settings.python.venv_python, exe_suffix));
        let venv_pip = venv_bin.join(format!("pip{}", exe_suffix));

        Self {
            output_dir: host.resolve(&paths.output_dir),
            venv_root,
            venv_dir,
            venv_bin,
            venv_python,
            venv_pip,
            requirements: host.resolve(&paths.requirements),
            pip_log: host.resolve(&paths.pip_log),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn default_layout() {
        let host = HostEnv::new("linux", "/home/ana", "/usr/bin", "/work");
        let paths = BootstrapPaths::new(&host, &Settings::default());

        assert_eq!(paths.output_dir, Path::new("/work/output"));
        assert_eq!(paths.venv_root, Path::new("/home/ana/.venvs"));
        assert_eq!(paths.venv_dir, Path::new("/home/ana/.venvs/oncotree-fhir"));
        assert!(paths.venv_bin.starts_with(&paths.venv_dir));
        assert!(paths.venv_python.starts_with(&paths.venv_bin));
        assert!(paths.venv_pip.starts_with(&paths.venv_bin));
        assert_eq!(paths.requirements, Path::new("/work/requirements.txt"));
        assert_eq!(paths.pip_log, Path::new("/work/pip-log.txt"));
    }

    #[test]
    fn absolute_venv_root_is_kept() {
        let host = HostEnv::new("linux", "/home/ana", "/usr/bin", "/work");
        let mut settings = Settings::default();
        settings.paths.venv_root = "/opt/venvs".to_string();

        let paths = BootstrapPaths::new(&host, &settings);
        assert_eq!(paths.venv_dir, Path::new("/opt/venvs/oncotree-fhir"));
    }
}
