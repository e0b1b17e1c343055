use std::process::ExitCode;

use clap::Parser;
use stat_core::StatError;
use stat_lab::facade::{StatLabCLI, dispatch};

fn main() -> ExitCode {
    let cli = StatLabCLI::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match dispatch(cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if e
                .downcast_ref::<StatError>()
                .is_some_and(StatError::is_invalid_input)
            {
                eprintln!("Please type valid numbers separated by the delimiter.");
            }
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
