//! Command to print the effective value of a key.

use crate::error::CliError;
use crate::utils::{build_resolver, parse_key, GlobalOptions};
use clap::{Args, ValueEnum};
use conflib::{FromValue, Resolver, Value};
use std::fmt::Display;

/// Scalar type to check the value against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    /// `true` or `false`
    Bool,
    /// A 64-bit signed integer
    Integer,
    /// A floating point number (integers widen)
    Float,
    /// Any scalar, printed as text
    String,
}

/// Print the effective value of a key.
#[derive(Args)]
pub struct GetCommand {
    /// Dotted key, optionally prefixed with `$.`
    pub key: String,

    /// Value to print when no layer holds the key
    #[arg(long, value_name = "VALUE")]
    pub default: Option<String>,

    /// Also print the layer the value came from
    #[arg(long)]
    pub show_source: bool,

    /// Require the value to have this type
    #[arg(long = "type", value_enum, value_name = "TYPE")]
    pub value_type: Option<ValueType>,

    /// Program arguments to resolve against
    #[arg(last = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl GetCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let key = parse_key(&self.key)?;
        let resolver = build_resolver(&self.args, global)?;

        let text = match self.value_type {
            None => untyped(&resolver, &self.key),
            Some(ValueType::Bool) => self.typed::<bool>(&resolver)?,
            Some(ValueType::Integer) => self.typed::<i64>(&resolver)?,
            Some(ValueType::Float) => self.typed::<f64>(&resolver)?,
            Some(ValueType::String) => self.typed::<String>(&resolver)?,
        };

        let source = resolver
            .source_of(&self.key)
            .map_or_else(|| "fallback".to_string(), |layer| layer.to_string());

        match text.or_else(|| self.default.clone()) {
            Some(text) if self.show_source => println!("{text}\t{source}"),
            Some(text) => println!("{text}"),
            None => return Err(CliError::NotFound(key.to_string())),
        }
        Ok(())
    }

    /// Strict lookup; the fallback must also parse as `T`.
    fn typed<T: DefaultText>(&self, resolver: &Resolver) -> Result<Option<String>, CliError> {
        if let Some(value) = resolver.try_get::<T>(&self.key)? {
            return Ok(Some(value.to_string()));
        }

        match &self.default {
            Some(raw) => T::parse_default(raw)
                .map(Some)
                .ok_or_else(|| {
                    CliError::InvalidArguments(format!(
                        "default '{raw}' is not a valid {}",
                        T::EXPECTED
                    ))
                }),
            None => Ok(None),
        }
    }
}

/// How a `--default` value is checked and rendered for a requested type.
trait DefaultText: FromValue + Display {
    fn parse_default(raw: &str) -> Option<String> {
        Self::from_value(&Value::infer(raw)).map(|value| value.to_string())
    }
}

impl DefaultText for bool {}
impl DefaultText for i64 {}
impl DefaultText for f64 {}

impl DefaultText for String {
    fn parse_default(raw: &str) -> Option<String> {
        Some(raw.to_string())
    }
}

/// Scalars print bare; mappings and arrays print as compact JSON.
fn untyped(resolver: &Resolver, key: &str) -> Option<String> {
    let resolved = resolver.lookup(key)?;
    Some(match resolved.value() {
        Some(value) => value.to_string(),
        None => resolved.node().to_string(),
    })
}
