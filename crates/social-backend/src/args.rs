use std::process::ExitCode;

use clap::{Parser, error::ErrorKind};
use config::args::ArgsConfig;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    #[command(flatten)]
    config: ArgsConfig,
}

/// Parse command line arguments. Help and version requests are
/// printed and returned as the exit code.
pub fn get_config() -> Result<ArgsConfig, ExitCode> {
    match Cli::try_parse() {
        Ok(cli) => Ok(cli.config),
        Err(e) => {
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => Err(ExitCode::SUCCESS),
                _ => Err(ExitCode::FAILURE),
            }
        }
    }
}
