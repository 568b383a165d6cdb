//! Dependency installation into the activated venv.

use std::fs::{self, File};
use std::path::Path;
use std::process::Stdio;

use super::activation::ActivatedEnv;
use super::command::exit_code_from_status;
use super::error::{BootstrapError, BootstrapResult};

/// Install `requirements` with pip inside the activated environment.
///
/// Installer stdout and stderr both go to `log`, an already opened
/// `pip_log`. A non-zero installer exit is an error naming that file.
pub fn install_dependencies(
    env: &ActivatedEnv,
    python: &Path,
    requirements: &Path,
    log: File,
    pip_log: &Path,
) -> BootstrapResult<()> {
    tracing::info!("Installing dependencies from {:?}", requirements);

    let log_err = log.try_clone()?;

    let status = env
        .command(python)
        .args(["-m", "pip", "install", "-r"])
        .arg(requirements)
        .stdin(Stdio::null())
        .stdout(Stdio::from(log))
        .stderr(Stdio::from(log_err))
        .status()
        .map_err(|e| BootstrapError::Spawn {
            program: python.display().to_string(),
            source: e,
        })?;

    if !status.success() {
        return Err(BootstrapError::InstallDeps {
            exit_code: exit_code_from_status(status),
            log: pip_log.to_path_buf(),
        });
    }

    Ok(())
}

/// Last `max_lines` lines of a text file, empty if it can't be read.
pub fn read_tail(path: &Path, max_lines: usize) -> Vec<String> {
    let Ok(content) = fs::read(path) else {
        return Vec::new();
    };
    let content = String::from_utf8_lossy(&content);
    let lines: Vec<&str> = content.lines().collect();
    let start = lines.len().saturating_sub(max_lines);
    lines[start..].iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn read_tail_keeps_last_lines() {
        let dir = tempdir().unwrap();
        let log = dir.path().join("pip-log.txt");
        fs::write(&log, "one\ntwo\nthree\nfour\n").unwrap();

        assert_eq!(read_tail(&log, 2), vec!["three", "four"]);
        assert_eq!(read_tail(&log, 10).len(), 4);
        assert!(read_tail(&dir.path().join("missing.txt"), 5).is_empty());
    }

    #[cfg(unix)]
    mod unix {
        use super::*;
        use crate::bootstrap::{BootstrapPaths, HostEnv};
        use crate::config::Settings;
        use std::os::unix::fs::PermissionsExt;

        fn venv_with_python(dir: &Path, script: &str) -> (ActivatedEnv, BootstrapPaths) {
            let host = HostEnv::new("linux", dir.join("home"), "/usr/bin:/bin", dir);
            let paths = BootstrapPaths::new(&host, &Settings::default());
            fs::create_dir_all(&paths.venv_bin).unwrap();
            let python = paths.venv_bin.join("python");
            fs::write(&python, script).unwrap();
            fs::set_permissions(&python, fs::Permissions::from_mode(0o755)).unwrap();
            (ActivatedEnv::activate(&paths, &host).unwrap(), paths)
        }

        #[test]
        fn successful_install_writes_log() {
            let dir = tempdir().unwrap();
            let (env, paths) = venv_with_python(
                dir.path(),
                "#!/bin/sh\necho \"pip $*\"\necho \"VIRTUAL_ENV=$VIRTUAL_ENV\" >&2\nexit 0\n",
            );
            fs::write(&paths.pip_log, "stale contents\n").unwrap();

            let python = paths.venv_bin.join("python");
            let log = File::create(&paths.pip_log).unwrap();
            install_dependencies(&env, &python, &paths.requirements, log, &paths.pip_log)
                .unwrap();

            let log = fs::read_to_string(&paths.pip_log).unwrap();
            assert!(!log.contains("stale contents"));
            assert!(log.contains("-m pip install -r"));
            assert!(log.contains(&format!("VIRTUAL_ENV={}", paths.venv_dir.display())));
        }

        #[test]
        fn failing_install_is_attributed() {
            let dir = tempdir().unwrap();
            let (env, paths) = venv_with_python(
                dir.path(),
                "#!/bin/sh\necho 'ERROR: Could not find a version' >&2\nexit 3\n",
            );

            let python = paths.venv_bin.join("python");
            let log = File::create(&paths.pip_log).unwrap();
            let err =
                install_dependencies(&env, &python, &paths.requirements, log, &paths.pip_log)
                    .unwrap_err();

            match &err {
                BootstrapError::InstallDeps { exit_code, log } => {
                    assert_eq!(*exit_code, 3);
                    assert_eq!(log, &paths.pip_log);
                }
                other => panic!("unexpected error: {other}"),
            }
            assert_eq!(
                read_tail(&paths.pip_log, 1),
                vec!["ERROR: Could not find a version"]
            );
        }
    }
}
