/// Appends a cache-busting marker to a path.
///
/// Implementations must return the same output for the same input for the lifetime of the
/// process, otherwise cached resolutions would disagree with fresh ones.
pub trait VersioningFormatter: Send + Sync {
  /// Versioned form of `path`.
  fn get_versioned_path(&self, path: &str) -> String;
}

/// Versioning that appends a fixed token as a query string parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryStringVersioning {
  parameter: String,
  version: String,
}

impl QueryStringVersioning {
  /// Append `?v={version}` to every path.
  pub fn new(version: impl Into<String>) -> Self {
    Self {
      parameter: "v".into(),
      version: version.into(),
    }
  }

  /// Use a different query parameter name.
  pub fn with_parameter(mut self, parameter: impl Into<String>) -> Self {
    self.parameter = parameter.into();
    self
  }
}

/// Uses the bunder release as the token. It does not change when site assets change, so set
/// an explicit version for real cache busting.
impl Default for QueryStringVersioning {
  fn default() -> Self {
    Self::new(env!("CARGO_PKG_VERSION"))
  }
}

impl VersioningFormatter for QueryStringVersioning {
  fn get_versioned_path(&self, path: &str) -> String {
    let (without_fragment, fragment) = match path.split_once('#') {
      Some((head, tail)) => (head, Some(tail)),
      None => (path, None),
    };
    let joiner = if without_fragment.contains('?') { '&' } else { '?' };

    let mut versioned = format!(
      "{without_fragment}{joiner}{}={}",
      self.parameter, self.version
    );
    if let Some(fragment) = fragment {
      versioned.push('#');
      versioned.push_str(fragment);
    }
    versioned
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn appends_query_parameter() {
    let versioning = QueryStringVersioning::new("abc123");
    assert_eq!(versioning.get_versioned_path("/js/site.js"), "/js/site.js?v=abc123");
  }

  #[test]
  fn extends_existing_query_strings() {
    let versioning = QueryStringVersioning::new("2").with_parameter("rev");
    assert_eq!(
      versioning.get_versioned_path("/api/script?lang=en"),
      "/api/script?lang=en&rev=2"
    );
  }

  #[test]
  fn keeps_fragment_last() {
    let versioning = QueryStringVersioning::new("7");
    assert_eq!(
      versioning.get_versioned_path("/img/sprite.svg#icon"),
      "/img/sprite.svg?v=7#icon"
    );
  }

  #[test]
  fn default_uses_package_version() {
    let versioned = QueryStringVersioning::default().get_versioned_path("a.css");
    assert_eq!(versioned, format!("a.css?v={}", env!("CARGO_PKG_VERSION")));
  }
}
