mod cli;
mod command;
mod commands;
mod logging;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandResult;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.print_help() {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}
