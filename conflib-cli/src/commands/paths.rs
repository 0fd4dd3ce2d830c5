//! Command to show the configuration files behind the file layers.

use crate::error::CliError;
use crate::utils::{loader_options, GlobalOptions};
use clap::Args;
use conflib::ConfigLoader;

/// Show which configuration files are consulted.
#[derive(Args)]
pub struct PathsCommand {
    /// Program arguments to resolve `-conf=` from
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl PathsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let options = loader_options(global);
        let sources = ConfigLoader::locate(&self.args, &options)?;

        if sources.is_empty() && !global.quiet {
            eprintln!("No configuration files apply");
        }

        for source in sources {
            let status = if source.exists { "found" } else { "missing" };
            println!("{}\t{}\t{status}", source.layer, source.path.display());
        }
        Ok(())
    }
}
