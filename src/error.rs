//! # Error Handling
//!
//! Every failure ends the conversion. Nothing is retried and no partial document
//! is produced: configuration, read and decode errors all surface before a
//! single byte of output exists.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
  /// The run was not configured correctly, e.g. no input file was given.
  #[error("configuration error: {0}")]
  Config(String),
  /// The input file could not be opened or read.
  #[error("cannot read {}", .path.display())]
  Io {
    /// File that failed.
    path: PathBuf,
    /// Underlying I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The input is not valid JSON or does not have the shape of a channel graph.
  #[error("cannot parse {}", .path.display())]
  Parse {
    /// File that failed.
    path: PathBuf,
    /// Underlying decode error, with line and column.
    #[source]
    source: serde_json::Error,
  },
  /// The document could not be rendered.
  #[error("serialization error: {0}")]
  Serialization(String),
}

impl ConvertError {
  /// Creates a configuration error.
  pub fn config(msg: impl Into<String>) -> Self {
    ConvertError::Config(msg.into())
  }

  /// Creates a serialization error from any displayable cause.
  pub fn serialization(cause: impl std::fmt::Display) -> Self {
    ConvertError::Serialization(cause.to_string())
  }
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
