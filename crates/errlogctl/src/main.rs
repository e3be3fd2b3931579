//! errlogctl - collect error lines from listed source files into a
//! Markdown report.

use clap::Parser;
use errlogctl::cli::Cli;
use errlogctl::{commands, errors, logging};
use tracing::error;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    if let Err(e) = commands::run(&cli) {
        error!("{:#}", e);
        std::process::exit(errors::exit_code_for(&e));
    }
}
