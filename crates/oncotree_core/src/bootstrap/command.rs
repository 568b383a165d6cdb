//! Converter command construction and execution.

use std::process::ExitStatus;

use super::activation::ActivatedEnv;
use super::error::{BootstrapError, BootstrapResult};
use crate::config::{ConverterSettings, PythonSettings};

/// The converter invocation: `<python> <script> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterCommand {
    /// Interpreter name as printed; the venv's own interpreter runs.
    pub program: String,
    /// Converter script.
    pub script: String,
    /// Arguments after the script, in order.
    pub args: Vec<String>,
}

impl ConverterCommand {
    /// Build the command from settings.
    ///
    /// Argument order: `--output=`, `--write-tsv` (if enabled),
    /// `--tsv-output=`, then the action. Templates are passed verbatim.
    pub fn from_settings(python: &PythonSettings, converter: &ConverterSettings) -> Self {
        let mut args = vec![format!("--output={}", converter.output_template)];
        if converter.write_tsv {
            args.push("--write-tsv".to_string());
        }
        args.push(format!("--tsv-output={}", converter.tsv_output_template));
        args.push(converter.action.clone());

        Self {
            program: python.venv_python.clone(),
            script: converter.script.clone(),
            args,
        }
    }

    /// Printable command line.
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.as_str(), self.script.as_str()];
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }

    /// Run synchronously in the activated environment with inherited stdio.
    ///
    /// Returns the converter's exit code.
    pub fn run(&self, env: &ActivatedEnv) -> BootstrapResult<i32> {
        let program = env.python();

        let status = env
            .command(program)
            .arg(&self.script)
            .args(&self.args)
            .status()
            .map_err(|e| BootstrapError::Spawn {
                program: program.display().to_string(),
                source: e,
            })?;

        Ok(exit_code_from_status(status))
    }
}

/// Map an exit status to a process exit code.
///
/// On Unix a signal-terminated child maps to `128 + signal`, like a shell.
pub fn exit_code_from_status(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_command() -> ConverterCommand {
        ConverterCommand::from_settings(&PythonSettings::default(), &ConverterSettings::default())
    }

    #[test]
    fn builds_four_arguments_in_order() {
        let cmd = default_command();
        assert_eq!(cmd.program, "python");
        assert_eq!(cmd.script, "oncotree-fhir.py");
        assert_eq!(
            cmd.args,
            vec![
                "--output=./output/$version.json",
                "--write-tsv",
                "--tsv-output=./output/$version.tsv",
                "convert-all",
            ]
        );
    }

    #[test]
    fn version_placeholder_is_left_literal() {
        let line = default_command().display();
        assert_eq!(line.matches("$version").count(), 2);
        assert!(line.contains("convert-all"));
        assert_eq!(
            line,
            "python oncotree-fhir.py --output=./output/$version.json --write-tsv \
             --tsv-output=./output/$version.tsv convert-all"
        );
    }

    #[test]
    fn write_tsv_flag_is_optional() {
        let converter = ConverterSettings {
            write_tsv: false,
            ..ConverterSettings::default()
        };
        let cmd = ConverterCommand::from_settings(&PythonSettings::default(), &converter);
        assert_eq!(cmd.args.len(), 3);
        assert!(!cmd.args.iter().any(|a| a == "--write-tsv"));
    }

    #[cfg(unix)]
    #[test]
    fn exit_codes_follow_shell_convention() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_code_from_status(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(7 << 8)), 7);
        // Killed by SIGKILL
        assert_eq!(exit_code_from_status(ExitStatus::from_raw(9)), 137);
    }
}
