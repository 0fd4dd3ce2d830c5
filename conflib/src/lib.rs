#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # conflib
//!
//! A layered configuration resolver.
//!
//! Configuration comes from three layers, highest precedence first:
//!
//! 1. Command-line arguments (`-key=value`, `-flag`)
//! 2. A custom file (`-conf=<path>`, else `~/.coderrect.json`)
//! 3. The installation default (`$CODERRECT_HOME/conf/coderrect.json`)
//!
//! A lookup asks each layer in turn and falls back to a caller-supplied
//! value when none of them holds the key.
//!
//! ## Core Types
//!
//! - [`Resolver`]: the lookup surface
//! - [`CommandLine`]: turns arguments into a [`Document`]
//! - [`ConfigLoader`] and [`LoaderOptions`]: locate and parse the files
//! - [`KeyPath`], [`Value`], [`Layer`]: keys, scalars and layer roles
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use conflib::{Document, Layer, LoaderOptions, Resolver};
//! use conflib::document::Format;
//!
//! let defaults = Document::parse(r#"{"racedetector": {"threshold": 2}}"#, Format::Json).unwrap();
//! let resolver = Resolver::initialize_with(&["-racedetector.verbose"], &LoaderOptions::new())
//!     .unwrap()
//!     .with_layer(Layer::Default, defaults);
//!
//! assert_eq!(resolver.get("racedetector.threshold", 0_i64), 2);
//! assert!(resolver.get("racedetector.verbose", false));
//! assert_eq!(resolver.get("racedetector.depth", 8_i64), 8);
//! ```

pub mod document;
pub mod error;
pub mod layer;
pub mod loader;
pub mod logging;
pub mod path;
pub mod resolver;
pub mod tokenizer;
pub mod value;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types at crate root for convenience
pub use document::Document;
pub use error::{Error, Result};
pub use layer::Layer;
pub use loader::{ConfigLoader, LayerSource, LoaderOptions};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::KeyPath;
pub use resolver::{Resolved, Resolver};
pub use tokenizer::CommandLine;
pub use value::{FromValue, Value};
