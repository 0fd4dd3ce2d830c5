//! CLI command implementations.
//!
//! - `get`: Print the effective value of a key
//! - `dump`: Print one layer as JSON
//! - `paths`: Show which configuration files are consulted

pub mod dump;
pub mod get;
pub mod paths;

pub use dump::DumpCommand;
pub use get::GetCommand;
pub use paths::PathsCommand;
