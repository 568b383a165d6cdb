//! oncotree-bootstrap - prepare the Python environment and run the converter
//!
//! Takes no arguments. Checks the platform and interpreter, creates
//! `./output` and the virtualenv under `~/.venvs`, installs
//! `requirements.txt`, then runs `oncotree-fhir.py convert-all` and exits
//! with its status.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context as _, Result};

use oncotree_core::bootstrap::HostEnv;
use oncotree_core::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use oncotree_core::logging::{init_tracing, RunLogger};
use oncotree_core::orchestrator::{run_bootstrap, Context};

fn main() -> ExitCode {
    match run() {
        Ok(code) => to_exit_code(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<i32> {
    let host = HostEnv::from_process().context("Failed to read the process environment")?;

    // Optional; never created
    let config_path = host.cwd.join(DEFAULT_CONFIG_FILE);
    let mut config_manager = ConfigManager::new(&config_path);
    let loaded = match config_manager.load_or_default() {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Warning: Failed to load config: {}. Using defaults.", e);
            false
        }
    };
    let settings = config_manager.into_settings();

    init_tracing(settings.logging.level);
    tracing::info!("oncotree-bootstrap {}", oncotree_core::version());
    if loaded {
        tracing::info!("Config: {}", config_path.display());
    }

    let logger = Arc::new(RunLogger::new(
        "bootstrap",
        settings.logging.to_log_config(),
        None,
    ));
    let ctx = Context::new(host, settings, logger);

    let code = match run_bootstrap(&ctx) {
        Ok(report) => {
            tracing::info!(
                "Completed {} steps ({} skipped), converter exited with {}",
                report.run.total_steps(),
                report.run.steps_skipped.len(),
                report.exit_code
            );
            report.exit_code
        }
        Err(e) => {
            tracing::error!("{}", e);
            e.exit_code()
        }
    };

    Ok(code)
}

/// Codes outside 0..=255 (a signalled converter reports -1) exit with 1.
fn to_exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converter_status_passes_through() {
        assert_eq!(to_exit_code(0), ExitCode::SUCCESS);
        assert_eq!(to_exit_code(5), ExitCode::from(5));
        assert_eq!(to_exit_code(255), ExitCode::from(255));
    }

    #[test]
    fn unrepresentable_codes_become_one() {
        assert_eq!(to_exit_code(-1), ExitCode::FAILURE);
        assert_eq!(to_exit_code(300), ExitCode::FAILURE);
    }
}
