use std::process::ExitCode;

use clap::Parser;

use stockwise_cli::Cli;

fn main() -> ExitCode {
    stockwise_observability::init();

    let cli = Cli::parse();
    let mut stdout = std::io::stdout().lock();

    match stockwise_cli::run(cli, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
