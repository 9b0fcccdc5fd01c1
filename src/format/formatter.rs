use std::sync::Arc;

use crate::error::{BunderError, BunderResult};
use crate::format::VersioningFormatter;
use crate::paths::{combine, validate_url_reference};

/// Produces the final renderable form of a raw path.
pub trait PathFormatter: Send + Sync {
  /// Validate `path`, optionally version it, and join it with the configured base.
  fn get_full_path(&self, path: &str, include_versioning: bool) -> BunderResult<String>;
}

/// Formatter for paths served over HTTP.
///
/// Paths must be well-formed URI references. A rooted path (`/js/site.js`) replaces the base
/// entirely, a relative one is appended to it.
#[derive(Clone)]
pub struct UrlPathFormatter {
  base: Option<String>,
  versioning: Arc<dyn VersioningFormatter>,
}

impl UrlPathFormatter {
  /// Formatter without a base location.
  pub fn new(versioning: Arc<dyn VersioningFormatter>) -> Self {
    Self {
      base: None,
      versioning,
    }
  }

  /// Join every formatted path onto `base`.
  pub fn with_base(mut self, base: impl Into<String>) -> Self {
    self.base = Some(base.into()).filter(|base| !base.trim().is_empty());
    self
  }

  /// Configured base location, if any.
  pub fn base(&self) -> Option<&str> {
    self.base.as_deref()
  }
}

impl std::fmt::Debug for UrlPathFormatter {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("UrlPathFormatter")
      .field("base", &self.base)
      .finish_non_exhaustive()
  }
}

impl PathFormatter for UrlPathFormatter {
  fn get_full_path(&self, path: &str, include_versioning: bool) -> BunderResult<String> {
    if path.is_empty() {
      return Err(BunderError::missing("path"));
    }
    validate_url_reference(path)?;

    let path = if include_versioning {
      self.versioning.get_versioned_path(path)
    } else {
      path.to_string()
    };

    combine(&[self.base.as_deref().unwrap_or_default(), path.as_str()])
  }
}
