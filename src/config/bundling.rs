use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::bundle::{Bundle, BundleConfig};
use crate::error::{BunderError, BunderResult};

/// Source of bundle definitions plus the output directories they are placed in.
pub trait BundlingConfiguration {
  /// Raw bundle definitions in declaration order.
  fn bundle_configs(&self) -> BunderResult<Vec<BundleConfig>>;

  /// Output base directory keyed by extension.
  fn output_directories(&self) -> &BTreeMap<String, String>;

  /// Turn every definition into a [`Bundle`] with its output path resolved.
  fn build(&self) -> BunderResult<Vec<Bundle>> {
    let directories = self.output_directories();

    self
      .bundle_configs()?
      .into_iter()
      .enumerate()
      .map(|(index, config)| {
        let extension = config.effective_extension();
        let output_directory = directories.get(&extension).map(String::as_str);
        if output_directory.is_none() {
          tracing::warn!(
            bundle = config.name.trim(),
            %extension,
            "no output directory configured for extension"
          );
        }

        Bundle::new(config, output_directory)
          .map_err(|err| BunderError::configuration(format!("bundle #{}: {err}", index + 1)))
      })
      .collect()
  }
}

/// Bundle definitions read from a JSON or YAML file.
#[derive(Debug, Clone)]
pub struct FileBundlingConfiguration {
  path: PathBuf,
  output_directories: BTreeMap<String, String>,
}

impl FileBundlingConfiguration {
  /// Read definitions from `path`.
  pub fn new(path: impl Into<PathBuf>, output_directories: BTreeMap<String, String>) -> Self {
    Self {
      path: path.into(),
      output_directories,
    }
  }

  /// File the definitions are read from.
  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl BundlingConfiguration for FileBundlingConfiguration {
  fn bundle_configs(&self) -> BunderResult<Vec<BundleConfig>> {
    if !self.path.is_file() {
      return Err(BunderError::configuration(format!(
        "configuration file {} was not found",
        self.path.display()
      )));
    }

    super::read_document(&self.path)
  }

  fn output_directories(&self) -> &BTreeMap<String, String> {
    &self.output_directories
  }
}

/// Bundle definitions supplied directly in code.
#[derive(Debug, Clone, Default)]
pub struct StaticBundlingConfiguration {
  configs: Vec<BundleConfig>,
  output_directories: BTreeMap<String, String>,
}

impl StaticBundlingConfiguration {
  /// Wrap already-parsed definitions.
  pub fn new(configs: Vec<BundleConfig>, output_directories: BTreeMap<String, String>) -> Self {
    Self {
      configs,
      output_directories,
    }
  }
}

impl BundlingConfiguration for StaticBundlingConfiguration {
  fn bundle_configs(&self) -> BunderResult<Vec<BundleConfig>> {
    Ok(self.configs.clone())
  }

  fn output_directories(&self) -> &BTreeMap<String, String> {
    &self.output_directories
  }
}
