//! Command to print a single configuration layer.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use conflib::Layer;

/// Print one layer as JSON.
///
/// Prints `null` when the layer is not bound.
#[derive(Args)]
pub struct DumpCommand {
    /// Layer to print (cmdline, custom, default)
    #[arg(long, default_value = "cmdline", value_parser = parse_layer)]
    pub layer: Layer,

    /// Program arguments to resolve against
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

fn parse_layer(s: &str) -> Result<Layer, String> {
    s.parse()
}

impl DumpCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(&self.args, global)?;

        match resolver.layer(self.layer) {
            Some(doc) => println!("{}", doc.to_json_pretty()),
            None => println!("null"),
        }
        Ok(())
    }
}
