//! Utility functions for CLI operations.
//!
//! This module turns global options into loader settings and builds the
//! resolver every command works against.

use crate::error::CliError;
use conflib::{KeyPath, LoaderOptions, Resolver};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the installation directory.
    pub install_dir: Option<PathBuf>,

    /// Override the home directory.
    pub home_dir: Option<PathBuf>,
}

/// Loader options with the global overrides applied on top of the environment.
pub fn loader_options(global: &GlobalOptions) -> LoaderOptions {
    let mut options = LoaderOptions::from_env();
    if let Some(dir) = &global.install_dir {
        options = options.with_install_dir(dir);
    }
    if let Some(dir) = &global.home_dir {
        options = options.with_home_dir(dir);
    }
    options
}

/// Builds a resolver from the forwarded program arguments.
pub fn build_resolver(args: &[String], global: &GlobalOptions) -> Result<Resolver, CliError> {
    let options = loader_options(global);
    log::debug!("loader options: {options:?}");
    Ok(Resolver::initialize_with(args, &options)?)
}

/// Validates a key given on the command line.
pub fn parse_key(key: &str) -> Result<KeyPath, CliError> {
    KeyPath::parse(key)
        .ok_or_else(|| CliError::InvalidArguments(format!("'{key}' is not a valid key")))
}
