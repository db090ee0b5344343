//! Runtime configuration.
//!
//! Layered as defaults → TOML file → command-line overrides (applied by the
//! binary). The parser only reads `max_docblocks`; the logging flags pick the
//! tracing level and never change what gets extracted.
//!
//! ```toml
//! # .scribeconf
//! max_docblocks = 200
//! verbose = true
//! traverse_symlinks = false
//! ```

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Default per-file limit, the file block included.
pub const DEFAULT_MAX_DOCBLOCKS: usize = 100;

/// Project-local config file picked up from the working directory.
pub const LOCAL_CONFIG_FILE: &str = ".scribeconf";

/// Setting this to `1` enables debug tracing.
pub const DEBUG_ENV: &str = "SHELLSCRIBE_DEBUG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum docblocks per file, including the file-level block.
    pub max_docblocks: usize,
    pub debug: bool,
    pub verbose: bool,
    /// Follow symlinked files while walking directories.
    pub traverse_symlinks: bool,
    /// Keep `@internal` functions in the output.
    pub show_internal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_docblocks: DEFAULT_MAX_DOCBLOCKS,
            debug: false,
            verbose: false,
            traverse_symlinks: false,
            show_internal: false,
        }
    }
}

impl Config {
    /// Parse a TOML config document.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content, path)
    }

    /// Load the explicit file if given, else `./.scribeconf` when present,
    /// else defaults. `SHELLSCRIBE_DEBUG=1` forces `debug`.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::load(path)?,
            None => {
                let local = PathBuf::from(LOCAL_CONFIG_FILE);
                if local.is_file() {
                    Self::load(&local)?
                } else {
                    Config::default()
                }
            }
        };
        if std::env::var(DEBUG_ENV).is_ok_and(|v| v == "1") {
            config.debug = true;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_docblocks == 0 {
            return Err(ConfigError::Invalid {
                key: "max_docblocks",
                message: "must be at least 1 (the file block)".to_string(),
            });
        }
        Ok(())
    }
}
