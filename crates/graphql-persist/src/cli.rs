use clap::CommandFactory;
use crate::commands;

/// Extracts GraphQL operations from a source tree into a persisted-query
/// map.
#[derive(clap::Parser, Debug)]
#[command(name = "graphql-persist", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Log at debug level (overrides LOG_LEVEL).",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn print_help(&self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
