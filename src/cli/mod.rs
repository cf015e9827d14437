mod handlers;
pub mod parse;

use std::ffi::OsString;

use clap::Parser;
use log::LevelFilter;
pub use parse::Cli;

use crate::core::error::PlotError;

/// Parse the process arguments, set up logging and draw the chart.
pub fn run() -> Result<(), PlotError> {
    run_from(std::env::args_os())
}

/// [`run`] over an explicit argument list, program name first.
///
/// A reversed range is reported on stdout and ends the run without error.
pub fn run_from<I, T>(args: I) -> Result<(), PlotError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = parse::Cli::parse_from(args);
    init_logging(cli.debug);
    match handlers::plot(&cli) {
        Err(e @ PlotError::InvalidRange { .. }) => {
            println!("{e}");
            Ok(())
        }
        other => other,
    }
}

/// `RUST_LOG` wins unless `--debug` asks for more.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    // Already initialised (e.g. by an embedding program) is fine.
    let _ = builder.try_init();
}
