use lox_harness::{HarnessError, cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match cli::run().await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            // A failing interpreter's exit code is passed through.
            e.downcast_ref::<HarnessError>()
                .map(HarnessError::exit_code)
                .unwrap_or(ExitCode::FAILURE)
        }
    }
}
