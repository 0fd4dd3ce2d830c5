//! Configuration file discovery and loading.
//!
//! This module decides which files back the custom and default layers and
//! parses them into [`Document`]s. A missing file only means the layer is
//! unbound; a file that exists but cannot be read or parsed is fatal.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::document::{Document, Format};
use crate::error::{Error, Result};
use crate::layer::Layer;
use crate::tokenizer::CommandLine;

/// Environment variable naming the installation directory.
pub const ENV_INSTALLATION_DIRECTORY: &str = "CODERRECT_HOME";

/// File name of the installation-wide configuration, under `conf/`.
pub const DEFAULT_CONFIGURATION_NAME: &str = "coderrect.json";

/// Custom file used when no `-conf=` argument is given.
pub const DEFAULT_CUSTOM_CONFIGURATION_PATH: &str = "~/.coderrect.json";

/// Where the loader looks for files.
///
/// # Examples
///
/// ```
/// use conflib::LoaderOptions;
/// use std::path::Path;
///
/// let options = LoaderOptions::new()
///     .with_install_dir("/opt/coderrect")
///     .with_home_dir("/home/dev");
/// assert_eq!(options.install_dir.as_deref(), Some(Path::new("/opt/coderrect")));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Installation directory; no default layer when `None`.
    pub install_dir: Option<PathBuf>,
    /// Home directory used to expand `~` in custom file paths.
    pub home_dir: Option<PathBuf>,
}

impl LoaderOptions {
    /// Options with no installation or home directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads `CODERRECT_HOME` and the user's home directory.
    ///
    /// An empty `CODERRECT_HOME` counts as unset.
    #[must_use]
    pub fn from_env() -> Self {
        let install_dir = env::var_os(ENV_INSTALLATION_DIRECTORY)
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        Self {
            install_dir,
            home_dir: home::home_dir(),
        }
    }

    /// Sets the installation directory.
    #[must_use]
    pub fn with_install_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.install_dir = Some(dir.into());
        self
    }

    /// Sets the home directory.
    #[must_use]
    pub fn with_home_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(dir.into());
        self
    }
}

/// A candidate file for one layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerSource {
    /// The layer the file backs.
    pub layer: Layer,
    /// Path to the file.
    pub path: PathBuf,
    /// Whether the file exists.
    pub exists: bool,
}

/// Loads the file-backed layers.
///
/// # Examples
///
/// ```no_run
/// use conflib::{ConfigLoader, LoaderOptions};
///
/// let options = LoaderOptions::from_env();
/// let default = ConfigLoader::load_default(&options).unwrap();
/// let custom = ConfigLoader::load_custom(&["-conf=project.json"], &options).unwrap();
/// println!("default: {}, custom: {}", default.is_some(), custom.is_some());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Path of the installation-wide file, if an install directory is known.
    #[must_use]
    pub fn default_config_path(options: &LoaderOptions) -> Option<PathBuf> {
        options
            .install_dir
            .as_ref()
            .map(|dir| dir.join("conf").join(DEFAULT_CONFIGURATION_NAME))
    }

    /// Path of the custom file: the last `-conf=` value, else
    /// `~/.coderrect.json`, with `~` expanded.
    ///
    /// Returns `None` when no `-conf=` argument is given and the home
    /// directory is unknown, since the fallback file cannot be located.
    ///
    /// # Errors
    ///
    /// Returns an error if a `-conf` argument is malformed, or its value
    /// starts with `~` and the home directory is unknown.
    pub fn custom_config_path<S: AsRef<str>>(
        args: &[S],
        options: &LoaderOptions,
    ) -> Result<Option<PathBuf>> {
        let home = options.home_dir.as_deref();
        match CommandLine::conf_path(args)? {
            Some(path) => expand_tilde(&path, home).map(Some),
            None if home.is_some() => {
                expand_tilde(Path::new(DEFAULT_CUSTOM_CONFIGURATION_PATH), home).map(Some)
            }
            None => {
                log::debug!("home directory unknown; no fallback custom configuration");
                Ok(None)
            }
        }
    }

    /// Both candidate files, default layer first.
    ///
    /// # Errors
    ///
    /// Returns an error if the custom path cannot be determined.
    pub fn locate<S: AsRef<str>>(args: &[S], options: &LoaderOptions) -> Result<Vec<LayerSource>> {
        let mut sources = Vec::new();

        if let Some(path) = Self::default_config_path(options) {
            sources.push(LayerSource {
                layer: Layer::Default,
                exists: path.exists(),
                path,
            });
        }

        if let Some(path) = Self::custom_config_path(args, options)? {
            sources.push(LayerSource {
                layer: Layer::Custom,
                exists: path.exists(),
                path,
            });
        }

        Ok(sources)
    }

    /// Loads the default layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_default(options: &LoaderOptions) -> Result<Option<Document>> {
        match Self::default_config_path(options) {
            Some(path) => Self::load_optional(&path),
            None => {
                log::debug!("{ENV_INSTALLATION_DIRECTORY} not set; no default configuration");
                Ok(None)
            }
        }
    }

    /// Loads the custom layer.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined, or the file exists
    /// but cannot be read or parsed.
    pub fn load_custom<S: AsRef<str>>(
        args: &[S],
        options: &LoaderOptions,
    ) -> Result<Option<Document>> {
        match Self::custom_config_path(args, options)? {
            Some(path) => Self::load_optional(&path),
            None => Ok(None),
        }
    }

    /// Loads a file if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_optional(path: &Path) -> Result<Option<Document>> {
        if !path.exists() {
            log::debug!("configuration file {} not found", path.display());
            return Ok(None);
        }

        Self::load_file(path).map(Some)
    }

    /// Load and parse a configuration file, choosing JSON or YAML by
    /// extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is malformed, or its
    /// root is not a mapping.
    pub fn load_file(path: &Path) -> Result<Document> {
        let contents = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        let doc = Document::parse(&contents, Format::from_path(path)).map_err(|message| {
            Error::ConfigParse {
                path: path.to_path_buf(),
                message,
            }
        })?;

        log::debug!("loaded configuration file {}", path.display());
        Ok(doc)
    }
}

/// Expand a leading `~` or `~/` against `home`.
///
/// Other paths, including `~user` forms, are returned unchanged.
///
/// # Errors
///
/// Returns [`Error::HomeDirectory`] if expansion is needed but `home` is
/// `None`.
///
/// # Examples
///
/// ```
/// use conflib::loader::expand_tilde;
/// use std::path::{Path, PathBuf};
///
/// let home = Path::new("/home/dev");
/// assert_eq!(
///     expand_tilde(Path::new("~/.coderrect.json"), Some(home)).unwrap(),
///     PathBuf::from("/home/dev/.coderrect.json")
/// );
/// assert_eq!(
///     expand_tilde(Path::new("conf.json"), None).unwrap(),
///     PathBuf::from("conf.json")
/// );
/// ```
pub fn expand_tilde(path: &Path, home: Option<&Path>) -> Result<PathBuf> {
    let Some(path_str) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    let rest = if path_str == "~" {
        ""
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        rest
    } else {
        return Ok(path.to_path_buf());
    };

    let home = home.ok_or_else(|| Error::HomeDirectory {
        path: path.to_path_buf(),
    })?;

    if rest.is_empty() {
        Ok(home.to_path_buf())
    } else {
        Ok(home.join(rest))
    }
}
