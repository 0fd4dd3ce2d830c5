//! Command-line argument tokenizer.
//!
//! Turns raw arguments of the form `-key=value` into the document that backs
//! the command-line layer. Keys are dotted paths; values are typed with
//! [`Value::infer`]. A bare `-key` means `-key=true`.
//!
//! | Argument           | Effect                                   |
//! |--------------------|------------------------------------------|
//! | `-conf=<path>`     | selects the custom file; not a key       |
//! | `-a.b=value`       | sets `a.b` to the inferred value         |
//! | `-a.b`             | sets `a.b` to `true`                     |
//! | `plain`, `=x`, `-` | ignored                                  |

use std::path::PathBuf;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::path::KeyPath;
use crate::value::Value;

/// Prefix of the argument naming the custom configuration file.
pub const CONF_FLAG: &str = "-conf=";

/// Builds documents from command-line arguments.
///
/// # Examples
///
/// ```
/// use conflib::{CommandLine, KeyPath, Value};
///
/// let doc = CommandLine::tokenize(&["-a.b=1", "-a.c=2", "-verbose", "input.c"]).unwrap();
/// assert_eq!(doc.value(&KeyPath::parse("a.b").unwrap()), Some(Value::Integer(1)));
/// assert_eq!(doc.value(&KeyPath::parse("a.c").unwrap()), Some(Value::Integer(2)));
/// assert_eq!(doc.value(&KeyPath::parse("verbose").unwrap()), Some(Value::Bool(true)));
/// assert_eq!(doc.len(), 2);
/// ```
pub struct CommandLine;

impl CommandLine {
    /// Converts arguments into a document.
    ///
    /// Arguments are applied in order, so a later value for the same key
    /// wins. The result is an empty document when no argument contributes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a flag's key is empty or has an
    /// empty segment (`-=1`, `-a..b=1`).
    pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Result<Document> {
        let mut doc = Document::new();

        for arg in args {
            let arg = arg.as_ref();
            if Self::is_skipped(arg) {
                continue;
            }

            let body = &arg[1..];
            let (raw_key, raw_value) = body.split_once('=').unwrap_or((body, "true"));

            let path = KeyPath::parse(raw_key).ok_or_else(|| Error::InvalidArgument {
                argument: arg.to_string(),
                reason: "key must be a dotted path of non-empty segments".to_string(),
            })?;

            doc.set(&path, Value::infer(raw_value));
        }

        log::debug!("command-line configuration: {}", doc.to_json_string());
        Ok(doc)
    }

    /// Returns the path given by the last `-conf=` argument, if any.
    ///
    /// An empty `-conf=` yields an empty path, which never exists, so the
    /// custom layer stays unbound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if a `-conf` argument has no `=`.
    pub fn conf_path<S: AsRef<str>>(args: &[S]) -> Result<Option<PathBuf>> {
        let mut found = None;

        for arg in args {
            let arg = arg.as_ref();
            if arg.starts_with(CONF_FLAG) {
                found = Some(Self::conf_value(arg)?);
            }
        }

        Ok(found.map(PathBuf::from))
    }

    /// Splits the path out of a `-conf=<path>` argument.
    fn conf_value(arg: &str) -> Result<&str> {
        match arg.split_once('=') {
            Some((_, value)) => Ok(value),
            None => Err(Error::InvalidArgument {
                argument: arg.to_string(),
                reason: "expected -conf=<path>".to_string(),
            }),
        }
    }

    fn is_skipped(arg: &str) -> bool {
        // A lone "-" is the usual stdin placeholder.
        arg == "-" || !arg.starts_with('-') || arg.starts_with(CONF_FLAG) || arg.starts_with('=')
    }
}
