use std::process::ExitCode;

mod config;
mod error;
mod layout;
mod library;
mod logger;
mod reconcile;
mod runtime;

fn main() -> ExitCode {
    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tesla-music: {e}");
            ExitCode::FAILURE
        }
    }
}
