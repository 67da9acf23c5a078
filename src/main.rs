use std::process::ExitCode;

fn main() -> ExitCode {
    match claude_sessions::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
