use std::process::ExitCode;

fn main() -> ExitCode {
    match float_bars::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
