//! Settings discovery and bundle definition loading.

mod bundling;
mod settings;

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{BunderError, BunderResult};

pub use bundling::{BundlingConfiguration, FileBundlingConfiguration, StaticBundlingConfiguration};
pub use settings::{BunderSettings, CacheSettings, DEFAULT_SETTINGS_FILE};

/// Read a JSON or YAML document, choosing the parser from the file extension.
fn read_document<T: DeserializeOwned>(path: &Path) -> BunderResult<T> {
  let content = fs::read_to_string(path).map_err(|source| BunderError::ConfigIo {
    path: path.to_path_buf(),
    source,
  })?;

  let is_yaml = path
    .extension()
    .and_then(|extension| extension.to_str())
    .is_some_and(|extension| matches!(extension.to_ascii_lowercase().as_str(), "yaml" | "yml"));

  let parsed = if is_yaml {
    serde_yaml::from_str(&content).map_err(|err| err.to_string())
  } else {
    serde_json::from_str(&content).map_err(|err| err.to_string())
  };

  parsed.map_err(|message| BunderError::ConfigParse {
    path: path.to_path_buf(),
    message,
  })
}
