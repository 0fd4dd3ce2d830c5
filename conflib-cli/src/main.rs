//! Main entry point for the conflib CLI.
//!
//! The CLI resolves configuration the same way a program linked against
//! the library would, and prints what it finds:
//! - `get`: Print the effective value of a key
//! - `dump`: Print one layer as JSON
//! - `paths`: Show which configuration files are consulted

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        install_dir: cli.install_dir,
        home_dir: cli.home_dir,
    };

    // Route library log records to stderr based on verbosity
    if let Err(e) = conflib::init_logger(global.verbose, global.quiet).install() {
        eprintln!("Warning: logger already installed: {e}");
    }

    let result = match cli.command {
        cli::Command::Get(cmd) => cmd.execute(&global),
        cli::Command::Dump(cmd) => cmd.execute(&global),
        cli::Command::Paths(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
