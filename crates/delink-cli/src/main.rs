use std::process::ExitCode;

use delink_core::logging;

mod cli;
mod clipboard;

#[tokio::main]
async fn main() -> ExitCode {
    // Log to the XDG state dir; fall back to stderr if that fails. Stdout
    // stays reserved for the canonical URL.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    match cli::run_from_args().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = cli::exit_code(&err);
            eprintln!("delink error: {:#}", anyhow::Error::new(err));
            ExitCode::from(code)
        }
    }
}
