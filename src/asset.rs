//! The renderable unit produced by asset resolution.

use std::fmt;
use std::sync::Arc;

use crate::bundle::Bundle;

/// A single resolved item, typically a path or other call to action.
///
/// An asset either stands for one file or, when [`Asset::bundle`] is set, for the combined
/// output of a whole [`Bundle`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
  value: String,
  is_static: bool,
  bundle: Option<Arc<Bundle>>,
}

impl Asset {
  /// Asset for a single file, eligible for de-duplication.
  pub fn new(value: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      is_static: false,
      bundle: None,
    }
  }

  /// Asset whose value is passed through verbatim and never compared against other assets.
  pub fn static_value(value: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      is_static: true,
      bundle: None,
    }
  }

  /// Asset standing for the output file of `bundle`.
  pub fn for_bundle(value: impl Into<String>, bundle: Arc<Bundle>) -> Self {
    Self {
      value: value.into(),
      is_static: false,
      bundle: Some(bundle),
    }
  }

  /// Resolved path or call to action.
  pub fn value(&self) -> &str {
    &self.value
  }

  /// Consume the asset, keeping only its value.
  pub fn into_value(self) -> String {
    self.value
  }

  /// Whether the value is exempt from comparison against bundle contents.
  pub fn is_static(&self) -> bool {
    self.is_static
  }

  /// Whether the asset references a bundle's output.
  pub fn is_bundle(&self) -> bool {
    self.bundle.is_some()
  }

  /// The bundle this asset stands for, if any.
  pub fn bundle(&self) -> Option<&Arc<Bundle>> {
    self.bundle.as_ref()
  }

  /// Whether the asset takes part in de-duplication.
  pub(crate) fn is_comparable(&self) -> bool {
    !self.is_static && self.bundle.is_none()
  }
}

impl fmt::Display for Asset {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::bundle::BundleConfig;

  #[test]
  fn plain_assets_are_comparable() {
    let asset = Asset::new("/js/site.js");
    assert!(asset.is_comparable());
    assert!(!asset.is_bundle());
    assert_eq!(asset.to_string(), "/js/site.js");
  }

  #[test]
  fn static_and_bundle_assets_are_exempt() {
    assert!(!Asset::static_value("https://cdn.example.com/lib.js").is_comparable());

    let bundle = Bundle::new(BundleConfig::new("site", ["a.js"]), Some("/out")).unwrap();
    let asset = Asset::for_bundle(bundle.output_path().to_string(), Arc::new(bundle));
    assert!(asset.is_bundle());
    assert!(!asset.is_static());
    assert!(!asset.is_comparable());
    assert_eq!(asset.bundle().map(|b| b.name()), Some("site"));
  }
}
