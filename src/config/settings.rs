use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BunderResult;

/// File name looked up by [`BunderSettings::discover`].
pub const DEFAULT_SETTINGS_FILE: &str = "bunder.json";

/// Process-wide defaults and locations used to build a resolver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BunderSettings {
  /// Render known bundles as their combined output unless a call overrides it.
  pub use_bundled_output: bool,
  /// Version resolved paths unless a call overrides it.
  pub use_versioning: bool,
  /// Bundle definitions file, relative to the content root.
  pub bundles_config_file_path: String,
  /// Output base directory keyed by file extension.
  pub output_directories: BTreeMap<String, String>,
  /// Base location joined in front of relative resolved paths.
  pub base_url: Option<String>,
  /// Token appended by the default versioning formatter. Falls back to the bunder release,
  /// which never changes with the site's assets.
  pub version: Option<String>,
  /// Resolution cache behaviour.
  pub cache: CacheSettings,
}

/// Resolution cache configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CacheSettings {
  /// Memoise resolution results.
  pub enabled: bool,
  /// Stop storing new results once this many are cached.
  pub max_entries: Option<usize>,
}

impl Default for BunderSettings {
  fn default() -> Self {
    Self {
      use_bundled_output: false,
      use_versioning: true,
      bundles_config_file_path: "bundles.json".into(),
      output_directories: BTreeMap::from([
        ("css".to_string(), "/css/bundles".to_string()),
        ("js".to_string(), "/js/bundles".to_string()),
      ]),
      base_url: None,
      version: None,
      cache: CacheSettings::default(),
    }
  }
}

impl BunderSettings {
  /// Load settings from `dir`, falling back to defaults when no settings file is usable.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_SETTINGS_FILE);
    if !candidate.exists() {
      return Self::default();
    }

    Self::from_path(&candidate).unwrap_or_else(|err| {
      tracing::warn!(error = %err, "ignoring unreadable settings file");
      Self::default()
    })
  }

  /// Read settings from a JSON or YAML file.
  pub fn from_path(path: &Path) -> BunderResult<Self> {
    super::read_document(path)
  }

  /// Output base directory for bundles with `extension`.
  pub fn output_directory(&self, extension: &str) -> Option<&str> {
    self.output_directories.get(extension).map(String::as_str)
  }

  /// Location of the bundle definitions file below `content_root`.
  pub fn bundles_config_path(&self, content_root: &Path) -> PathBuf {
    content_root.join(&self.bundles_config_file_path)
  }
}
