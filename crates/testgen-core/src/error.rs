//! Error types for testgen core.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating or saving scripts
#[derive(Error, Debug)]
pub enum TestgenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Description cannot be empty")]
    EmptyDescription,
}

pub type Result<T> = std::result::Result<T, TestgenError>;
