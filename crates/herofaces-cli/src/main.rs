use clap::Parser;
use herofaces_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();

    // Completions go to stdout, which the default logger also writes to.
    if cli.wants_logging() && logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    if let Err(err) = cli.run() {
        eprintln!("herofaces error: {:#}", err);
        std::process::exit(1);
    }
}
