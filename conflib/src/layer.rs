//! Configuration layer roles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the three configuration sources.
///
/// Layers are ordered by precedence: the first variant wins.
///
/// # Examples
///
/// ```
/// use conflib::Layer;
///
/// assert!(Layer::Cmdline < Layer::Custom);
/// assert!(Layer::Custom < Layer::Default);
/// assert_eq!(Layer::PRECEDENCE[0], Layer::Cmdline);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    /// Overrides given as `-key=value` arguments.
    Cmdline,
    /// The user file chosen by `-conf=` or the home-directory fallback.
    Custom,
    /// The installation-wide file.
    Default,
}

impl Layer {
    /// All layers, highest precedence first.
    pub const PRECEDENCE: [Layer; 3] = [Layer::Cmdline, Layer::Custom, Layer::Default];

    /// The lowercase name of the layer.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cmdline => "cmdline",
            Self::Custom => "custom",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Layer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "cmdline" => Ok(Self::Cmdline),
            "custom" => Ok(Self::Custom),
            "default" => Ok(Self::Default),
            _ => Err(format!("invalid layer: {s} (expected cmdline, custom or default)")),
        }
    }
}
