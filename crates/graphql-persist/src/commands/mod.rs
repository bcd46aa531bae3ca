mod extract;

use crate::Cli;
use crate::CommandResult;
use crate::command::RunnableCommand;
use extract::ExtractCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-persist")]
pub(crate) enum CommandEnum {
    /// Extract every operation under a path into a persisted-query map.
    Extract(Box<ExtractCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Extract(cmd) => RunnableCommand::run(*cmd, cli).await,
        }
    }
}

#[cfg(test)]
mod tests;
