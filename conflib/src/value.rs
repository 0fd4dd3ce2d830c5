//! Scalar configuration values and checked typed extraction.

use std::fmt;

use serde::Serialize;
use serde_json::Value as JsonValue;

/// A scalar leaf stored in a configuration document.
///
/// # Examples
///
/// ```
/// use conflib::Value;
///
/// assert_eq!(Value::infer("TRUE"), Value::Bool(true));
/// assert_eq!(Value::infer("42"), Value::Integer(42));
/// assert_eq!(Value::infer("2.75"), Value::Float(2.75));
/// assert_eq!(Value::infer("hello"), Value::String("hello".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A double-precision float.
    Float(f64),
    /// A string, stored verbatim.
    String(String),
}

impl Value {
    /// Infers a typed value from raw command-line text.
    ///
    /// Priority: `true`/`false` (any case), then a 32-bit integer, then a
    /// finite float, and otherwise the text itself. Integers that overflow
    /// 32 bits fall through to the float rule. Only the float rule ignores
    /// surrounding whitespace.
    #[must_use]
    pub fn infer(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("true") {
            Self::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Self::Bool(false)
        } else if let Ok(int) = raw.parse::<i32>() {
            Self::Integer(i64::from(int))
        } else if let Some(float) = parse_finite_float(raw) {
            Self::Float(float)
        } else {
            Self::String(raw.to_string())
        }
    }

    /// Reads a scalar out of a document node.
    ///
    /// Returns `None` for mappings, arrays and nulls.
    #[must_use]
    pub fn from_node(node: &JsonValue) -> Option<Self> {
        match node {
            JsonValue::Bool(b) => Some(Self::Bool(*b)),
            JsonValue::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float)),
            JsonValue::String(s) => Some(Self::String(s.clone())),
            JsonValue::Null | JsonValue::Array(_) | JsonValue::Object(_) => None,
        }
    }

    /// Human-readable name of the stored type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
        }
    }
}

/// Human-readable name of a document node's type.
#[must_use]
pub fn node_type_name(node: &JsonValue) -> &'static str {
    match node {
        JsonValue::Null => "null",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "mapping",
        JsonValue::Bool(_) | JsonValue::Number(_) | JsonValue::String(_) => {
            Value::from_node(node).map_or("number", |v| v.type_name())
        }
    }
}

fn parse_finite_float(raw: &str) -> Option<f64> {
    // Rust accepts "inf" and "NaN" here; JSON cannot carry them, so they stay text.
    raw.trim().parse::<f64>().ok().filter(|f| f.is_finite())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(b),
            Value::Integer(i) => Self::from(i),
            Value::Float(x) => serde_json::Number::from_f64(x).map_or(Self::Null, Self::Number),
            Value::String(s) => Self::String(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Checked conversion from a stored [`Value`] to a caller's type.
///
/// Conversions are exact: integers must fit the target type, floats are not
/// truncated to integers, and booleans never come from numbers. Integers
/// widen to floats, and any scalar can be read as a `String`.
pub trait FromValue: Sized {
    /// Name used in type mismatch reports.
    const EXPECTED: &'static str;

    /// Converts the value, or returns `None` if it does not fit.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    const EXPECTED: &'static str = "scalar";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for bool {
    const EXPECTED: &'static str = "boolean";

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for String {
    const EXPECTED: &'static str = "string";

    fn from_value(value: &Value) -> Option<Self> {
        Some(value.to_string())
    }
}

impl FromValue for f64 {
    const EXPECTED: &'static str = "float";

    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(x) => Some(*x),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

macro_rules! impl_from_value_for_int {
    ($($ty:ty),*) => {
        $(
            impl FromValue for $ty {
                const EXPECTED: &'static str = "integer";

                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::Integer(i) => <$ty>::try_from(*i).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_from_value_for_int!(i32, i64, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_booleans_case_insensitive() {
        assert_eq!(Value::infer("true"), Value::Bool(true));
        assert_eq!(Value::infer("FALSE"), Value::Bool(false));
        assert_eq!(Value::infer("True"), Value::Bool(true));
    }

    #[test]
    fn test_infer_integers() {
        assert_eq!(Value::infer("42"), Value::Integer(42));
        assert_eq!(Value::infer("-7"), Value::Integer(-7));
        assert_eq!(Value::infer("+3"), Value::Integer(3));
        assert_eq!(Value::infer("2147483647"), Value::Integer(2_147_483_647));
    }

    #[test]
    fn test_infer_large_integer_falls_back_to_float() {
        assert_eq!(Value::infer("9999999999"), Value::Float(9_999_999_999.0));
    }

    #[test]
    fn test_infer_floats() {
        assert_eq!(Value::infer("2.75"), Value::Float(2.75));
        assert_eq!(Value::infer("1e3"), Value::Float(1000.0));
        assert_eq!(Value::infer(".5"), Value::Float(0.5));
        assert_eq!(Value::infer(" 3.5"), Value::Float(3.5));
        assert_eq!(Value::infer(" 42 "), Value::Float(42.0));
        assert_eq!(Value::infer(" "), Value::String(" ".to_string()));
    }

    #[test]
    fn test_infer_non_finite_stays_string() {
        assert_eq!(Value::infer("NaN"), Value::String("NaN".to_string()));
        assert_eq!(Value::infer("inf"), Value::String("inf".to_string()));
    }

    #[test]
    fn test_infer_string_verbatim() {
        assert_eq!(Value::infer("hello"), Value::String("hello".to_string()));
        assert_eq!(Value::infer(""), Value::String(String::new()));
        assert_eq!(Value::infer("a\\nb"), Value::String("a\\nb".to_string()));
        assert_eq!(Value::infer("yes"), Value::String("yes".to_string()));
    }

    #[test]
    fn test_from_node() {
        assert_eq!(Value::from_node(&json!(true)), Some(Value::Bool(true)));
        assert_eq!(Value::from_node(&json!(5)), Some(Value::Integer(5)));
        assert_eq!(Value::from_node(&json!(2.5)), Some(Value::Float(2.5)));
        assert_eq!(Value::from_node(&json!("x")), Some(Value::from("x")));
        assert_eq!(Value::from_node(&json!(null)), None);
        assert_eq!(Value::from_node(&json!([1])), None);
        assert_eq!(Value::from_node(&json!({"a": 1})), None);
    }

    #[test]
    fn test_node_type_names() {
        assert_eq!(node_type_name(&json!({})), "mapping");
        assert_eq!(node_type_name(&json!([])), "array");
        assert_eq!(node_type_name(&json!(null)), "null");
        assert_eq!(node_type_name(&json!(1)), "integer");
        assert_eq!(node_type_name(&json!(1.5)), "float");
    }

    #[test]
    fn test_into_json() {
        assert_eq!(JsonValue::from(Value::Integer(5)), json!(5));
        assert_eq!(JsonValue::from(Value::Float(2.75)), json!(2.75));
        assert_eq!(JsonValue::from(Value::from("s")), json!("s"));
    }

    #[test]
    fn test_extract_exact_types() {
        assert_eq!(bool::from_value(&Value::Bool(true)), Some(true));
        assert_eq!(bool::from_value(&Value::Integer(1)), None);
        assert_eq!(i64::from_value(&Value::Integer(5)), Some(5));
        assert_eq!(i64::from_value(&Value::Float(5.0)), None);
        assert_eq!(u16::from_value(&Value::Integer(70_000)), None);
        assert_eq!(u32::from_value(&Value::Integer(-1)), None);
    }

    #[test]
    fn test_extract_widening() {
        assert_eq!(f64::from_value(&Value::Integer(2)), Some(2.0));
        assert_eq!(String::from_value(&Value::Integer(42)), Some("42".to_string()));
        assert_eq!(String::from_value(&Value::Bool(false)), Some("false".to_string()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Float(2.75).to_string(), "2.75");
        assert_eq!(Value::from("plain").to_string(), "plain");
    }
}
