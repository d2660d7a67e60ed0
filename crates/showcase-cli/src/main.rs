//! Vehicle Showcase - browse, compare and get recommendations for vehicles
//!
//! A CLI front end over the showcase catalog and comparison list.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    showcase_app::logging::init_logging(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
