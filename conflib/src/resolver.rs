//! Layered configuration lookup.
//!
//! A [`Resolver`] holds up to three documents, one per [`Layer`], and answers
//! point lookups with the precedence cmdline > custom > default > fallback.
//! A key missing from a layer is never an error: the next layer is asked.
//!
//! # Examples
//!
//! ```no_run
//! use conflib::Resolver;
//!
//! let args: Vec<String> = std::env::args().skip(1).collect();
//! let config = Resolver::initialize(&args).unwrap();
//! let threshold: i64 = config.get("racedetector.threshold", 2);
//! ```

use serde_json::Value as JsonValue;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::loader::{ConfigLoader, LoaderOptions};
use crate::path::KeyPath;
use crate::tokenizer::CommandLine;
use crate::value::{node_type_name, FromValue, Value};

/// A node found by [`Resolver::lookup`], with the layer that supplied it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved<'a> {
    layer: Layer,
    node: &'a JsonValue,
}

impl<'a> Resolved<'a> {
    /// The layer holding the key.
    #[must_use]
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// The raw node, which may be a mapping or array.
    #[must_use]
    pub fn node(&self) -> &'a JsonValue {
        self.node
    }

    /// The node as a scalar, if it is one.
    #[must_use]
    pub fn value(&self) -> Option<Value> {
        Value::from_node(self.node)
    }

    /// Extracts the node as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the node is not a scalar that
    /// converts to `T`.
    pub fn extract<T: FromValue>(&self, key: &str) -> Result<T> {
        self.value()
            .and_then(|value| T::from_value(&value))
            .ok_or_else(|| Error::TypeMismatch {
                key: key.to_string(),
                layer: self.layer,
                expected: T::EXPECTED,
                found: node_type_name(self.node),
            })
    }
}

/// Three-layer configuration resolver.
///
/// Construct one at startup with [`Resolver::initialize`] and pass it by
/// reference to whatever needs configuration. It is immutable once built.
///
/// # Examples
///
/// ```
/// use conflib::{CommandLine, Layer, Resolver};
///
/// let cmdline = CommandLine::tokenize(&["-racedetector.threshold=5"]).unwrap();
/// let resolver = Resolver::new().with_layer(Layer::Cmdline, cmdline);
///
/// assert_eq!(resolver.get("racedetector.threshold", 2_i64), 5);
/// assert_eq!(resolver.get("$.racedetector.threshold", 2_i64), 5);
/// assert_eq!(resolver.get("racedetector.missing", 2_i64), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolver {
    cmdline: Option<Document>,
    custom: Option<Document>,
    default: Option<Document>,
}

impl Resolver {
    /// A resolver with every layer unbound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds all three layers from the process arguments, reading
    /// `CODERRECT_HOME` and the home directory from the environment.
    ///
    /// # Errors
    ///
    /// Fails if an existing default or custom file cannot be read or parsed,
    /// or an argument is malformed.
    pub fn initialize<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        Self::initialize_with(args, &LoaderOptions::from_env())
    }

    /// Builds all three layers using explicit file locations.
    ///
    /// # Errors
    ///
    /// Fails if an existing default or custom file cannot be read or parsed,
    /// or an argument is malformed.
    pub fn initialize_with<S: AsRef<str>>(args: &[S], options: &LoaderOptions) -> Result<Self> {
        let default = ConfigLoader::load_default(options)?;
        let custom = ConfigLoader::load_custom(args, options)?;
        let cmdline = CommandLine::tokenize(args)?;

        log::debug!(
            "configuration layers bound: cmdline=true custom={} default={}",
            custom.is_some(),
            default.is_some()
        );

        Ok(Self {
            cmdline: Some(cmdline),
            custom,
            default,
        })
    }

    /// Binds `doc` to `layer`, replacing any previous binding.
    #[must_use]
    pub fn with_layer(mut self, layer: Layer, doc: Document) -> Self {
        *self.slot_mut(layer) = Some(doc);
        self
    }

    /// The document bound to `layer`, if any.
    #[must_use]
    pub fn layer(&self, layer: Layer) -> Option<&Document> {
        match layer {
            Layer::Cmdline => self.cmdline.as_ref(),
            Layer::Custom => self.custom.as_ref(),
            Layer::Default => self.default.as_ref(),
        }
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Option<Document> {
        match layer {
            Layer::Cmdline => &mut self.cmdline,
            Layer::Custom => &mut self.custom,
            Layer::Default => &mut self.default,
        }
    }

    /// Finds the highest-precedence layer holding `key`.
    ///
    /// `key` may be bare (`a.b`) or rooted (`$.a.b`). Malformed keys are
    /// reported as absent.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<Resolved<'_>> {
        let path = KeyPath::parse(key)?;
        Layer::PRECEDENCE.into_iter().find_map(|layer| {
            self.layer(layer)
                .and_then(|doc| doc.node(&path))
                .map(|node| Resolved { layer, node })
        })
    }

    /// Returns true if any layer holds `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// The layer that supplies `key`, if any.
    #[must_use]
    pub fn source_of(&self, key: &str) -> Option<Layer> {
        self.lookup(key).map(|resolved| resolved.layer())
    }

    /// Effective value of `key`, or `default` if no layer holds it.
    ///
    /// A stored value that does not convert to `T` is logged as a warning
    /// and `default` is returned.
    #[must_use]
    pub fn get<T: FromValue>(&self, key: &str, default: T) -> T {
        match self.try_get(key) {
            Ok(Some(value)) => value,
            Ok(None) => {
                log::debug!("'{key}' not configured; using fallback");
                default
            }
            Err(err) => {
                log::warn!("{err}; using fallback");
                default
            }
        }
    }

    /// Effective value of `key` with strict type checking.
    ///
    /// Returns `Ok(None)` when no layer holds the key.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the owning layer's value does not
    /// convert to `T`. Lower layers are not consulted in that case.
    pub fn try_get<T: FromValue>(&self, key: &str) -> Result<Option<T>> {
        self.lookup(key)
            .map(|resolved| resolved.extract::<T>(key))
            .transpose()
    }
}
