//! Error types for the extraction engine and its configuration.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// File-level failures. Nothing below this level is fatal.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Why a single tag was dropped. Logged, never propagated out of the parser.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TagError {
    #[error("@{0} requires content")]
    EmptyContent(&'static str),

    #[error("@{0} is missing a name")]
    MissingName(&'static str),

    #[error("malformed option: {0}")]
    InvalidOption(String),

    #[error("unknown tag @{0}")]
    UnknownTag(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}
