//! oncotree-fhir - convert OncoTree releases to FHIR R4 CodeSystems

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};

use oncotree_core::bootstrap::HostEnv;
use oncotree_core::convert::{Action, ConvertArgs, ConvertError, Converter, DEFAULT_VERSION};
use oncotree_core::fhir::{DEFAULT_CANONICAL, DEFAULT_VALUESET};
use oncotree_core::logging::{init_tracing, LogConfig, LogLevel, RunLogger};
use oncotree_core::oncotree::DEFAULT_API_URL;

#[derive(Parser, Debug)]
#[command(
    name = "oncotree-fhir",
    about = "Convert OncoTree to a HL7 FHIR CodeSystem resource",
    disable_version_flag = true
)]
struct Cli {
    /// Version of OncoTree to download
    #[arg(short = 'v', long, default_value = DEFAULT_VERSION)]
    version: String,

    /// Endpoint for the OncoTree API
    #[arg(short = 'u', long, default_value = DEFAULT_API_URL)]
    url: String,

    /// Output file in JSON format. $version is replaced with the version string
    #[arg(short = 'o', long, default_value = "./$version.json")]
    output: String,

    /// Canonical URL of the CodeSystem to generate
    #[arg(long, default_value = DEFAULT_CANONICAL)]
    canonical: String,

    /// Canonical URL of the implicit ValueSet with all codes
    #[arg(long, default_value = DEFAULT_VALUESET)]
    valueset: String,

    /// Also write the CodeSystem as a code/label/parent TSV file
    #[arg(long)]
    write_tsv: bool,

    /// Output file in TSV format (with --write-tsv). $version is replaced with the version string
    #[arg(long, default_value = "./$version.tsv")]
    tsv_output: String,

    /// Action to carry out
    #[arg(value_enum, default_value_t = ActionArg::Convert)]
    action: ActionArg,

    /// Print debug output
    #[arg(long)]
    debug: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ActionArg {
    Versions,
    Convert,
    ConvertAll,
}

impl From<ActionArg> for Action {
    fn from(arg: ActionArg) -> Self {
        match arg {
            ActionArg::Versions => Action::Versions,
            ActionArg::Convert => Action::Convert,
            ActionArg::ConvertAll => Action::ConvertAll,
        }
    }
}

impl Cli {
    fn into_args(self) -> ConvertArgs {
        ConvertArgs {
            version: self.version,
            url: self.url.trim_end_matches('/').to_string(),
            output: self.output,
            canonical: self.canonical,
            valueset: self.valueset,
            write_tsv: self.write_tsv,
            tsv_output: self.tsv_output,
            action: self.action.into(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = if cli.debug {
        LogConfig::debug()
    } else {
        LogConfig::default()
    };
    init_tracing(if cli.debug { LogLevel::Debug } else { LogLevel::Warn });

    match run(cli.into_args(), config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            exit_code_for(&e)
        }
    }
}

/// Argument errors exit with 2 like a usage error; everything else with 1.
fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    let code = err
        .downcast_ref::<ConvertError>()
        .map_or(1, ConvertError::exit_code);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

async fn run(args: ConvertArgs, config: LogConfig) -> Result<()> {
    let logger = Arc::new(RunLogger::new("oncotree-fhir", config, None));
    for line in args.describe() {
        logger.info(&line);
    }

    let host = HostEnv::from_process().context("Failed to read the process environment")?;
    let converter = Converter::new(args, host.home_dir, host.cwd, Arc::clone(&logger));
    let outputs = converter.run().await?;

    tracing::info!("Converted {} release(s)", outputs.len());
    Ok(())
}
