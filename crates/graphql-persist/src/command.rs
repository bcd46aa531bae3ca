use crate::Cli;
use std::fmt;
use std::process::ExitCode;

const GREEN_CHECK: &str = "\u{2705}";
const RED_X: &str = "\u{274c}";

pub(crate) trait RunnableCommand: fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}

/// What a subcommand wants printed, and the status the process exits with.
#[derive(Debug)]
pub(crate) struct CommandResult {
    pub exit_code: ExitCode,
    pub stderr: Option<String>,
    pub stdout: Option<String>,
}

impl CommandResult {
    pub fn failure(fmt_args: fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::FAILURE,
            stderr: Some(format!("{RED_X} {fmt_args}")),
            stdout: None,
        }
    }

    pub fn success(fmt_args: fmt::Arguments<'_>) -> Self {
        Self {
            exit_code: ExitCode::SUCCESS,
            stderr: None,
            stdout: Some(format!("{GREEN_CHECK} {fmt_args}")),
        }
    }

    #[cfg(test)]
    pub fn is_success(&self) -> bool {
        self.stderr.is_none()
    }
}
