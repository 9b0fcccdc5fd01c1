//! Error taxonomy shared by the resolver, its collaborators and the configuration loaders.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type BunderResult<T> = Result<T, BunderError>;

/// Coarse classification of a [`BunderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// A required argument was absent.
  Argument,
  /// A supplied path is not valid for the addressing scheme in effect.
  Format,
  /// Bundle or settings configuration is missing or malformed.
  Configuration,
}

/// Errors raised while loading configuration or resolving assets.
#[derive(Debug, Error)]
pub enum BunderError {
  /// A required argument was absent or blank.
  #[error("missing required argument `{name}`")]
  MissingArgument {
    /// Name of the missing argument.
    name: &'static str,
  },

  /// A path failed syntactic validation.
  #[error("invalid path `{path}`: {reason}")]
  InvalidPath {
    /// Offending path exactly as supplied.
    path: String,
    /// Human readable explanation.
    reason: String,
  },

  /// Bundle configuration is inconsistent.
  #[error("bundle configuration error: {message}")]
  Configuration {
    /// Description of the problem.
    message: String,
  },

  /// A configuration file could not be read.
  #[error("failed to read {}", .path.display())]
  ConfigIo {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },

  /// A configuration file could not be parsed.
  #[error("failed to parse {}: {message}", .path.display())]
  ConfigParse {
    /// Path that caused the error.
    path: PathBuf,
    /// Parser diagnostic.
    message: String,
  },
}

impl BunderError {
  /// Shorthand for [`BunderError::MissingArgument`].
  pub fn missing(name: &'static str) -> Self {
    Self::MissingArgument { name }
  }

  /// Shorthand for [`BunderError::InvalidPath`].
  pub fn invalid_path(path: impl Into<String>, reason: impl Into<String>) -> Self {
    Self::InvalidPath {
      path: path.into(),
      reason: reason.into(),
    }
  }

  /// Shorthand for [`BunderError::Configuration`].
  pub fn configuration(message: impl Into<String>) -> Self {
    Self::Configuration {
      message: message.into(),
    }
  }

  /// Which branch of the taxonomy this error belongs to.
  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::MissingArgument { .. } => ErrorKind::Argument,
      Self::InvalidPath { .. } => ErrorKind::Format,
      Self::Configuration { .. } | Self::ConfigIo { .. } | Self::ConfigParse { .. } => {
        ErrorKind::Configuration
      }
    }
  }
}
