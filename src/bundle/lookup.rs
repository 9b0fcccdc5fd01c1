use std::collections::HashMap;
use std::sync::Arc;

use crate::bundle::Bundle;
use crate::error::{BunderError, BunderResult};

/// Keyed, read-only access to registered bundles.
pub trait BundleLookup: Send + Sync {
  /// Returns the bundle registered under `name`, if any.
  fn try_get_bundle(&self, name: &str) -> Option<Arc<Bundle>>;
}

/// Immutable name-indexed set of bundles, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct BundleRegistry {
  bundles: HashMap<String, Arc<Bundle>>,
}

impl BundleRegistry {
  /// Index the supplied bundles by name, rejecting duplicate names.
  pub fn new(bundles: impl IntoIterator<Item = Bundle>) -> BunderResult<Self> {
    let mut indexed = HashMap::new();
    for bundle in bundles {
      let name = bundle.name().to_string();
      if indexed.insert(name.clone(), Arc::new(bundle)).is_some() {
        return Err(BunderError::configuration(format!(
          "bundle `{name}` is registered more than once"
        )));
      }
    }

    tracing::info!(count = indexed.len(), "bundle registry built");
    Ok(Self { bundles: indexed })
  }

  /// Number of registered bundles.
  pub fn len(&self) -> usize {
    self.bundles.len()
  }

  /// Whether no bundles are registered.
  pub fn is_empty(&self) -> bool {
    self.bundles.is_empty()
  }

  /// Registered bundle names in sorted order.
  pub fn names(&self) -> Vec<&str> {
    let mut names: Vec<&str> = self.bundles.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
  }
}

impl BundleLookup for BundleRegistry {
  fn try_get_bundle(&self, name: &str) -> Option<Arc<Bundle>> {
    self.bundles.get(name).cloned()
  }
}
