//! Error types for the testgen front-end

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the user config file. Reported as warnings; never fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Refusing to read {}: file too large ({size} bytes, max {max})", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{key}': {message}")]
    Invalid { key: &'static str, message: String },
}
