//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{DumpCommand, GetCommand, PathsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect layered configuration.
#[derive(Parser)]
#[command(name = "conflib")]
#[command(version, about = "Inspect layered conflib configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the installation directory holding conf/coderrect.json
    #[arg(long, value_name = "PATH", global = true, env = "CODERRECT_HOME")]
    pub install_dir: Option<PathBuf>,

    /// Override the home directory used to find ~/.coderrect.json
    #[arg(long, value_name = "PATH", global = true)]
    pub home_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the effective value of a key
    Get(GetCommand),

    /// Print one layer as JSON
    Dump(DumpCommand),

    /// Show which configuration files are consulted
    Paths(PathsCommand),
}
