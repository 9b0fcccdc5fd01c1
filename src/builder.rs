//! Wiring of settings, bundle definitions and collaborators into a ready resolver.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::bundle::BundleRegistry;
use crate::cache::{ResolutionCache, cache_from_settings};
use crate::config::{BunderSettings, BundlingConfiguration, FileBundlingConfiguration};
use crate::error::BunderResult;
use crate::format::{PathFormatter, QueryStringVersioning, UrlPathFormatter, VersioningFormatter};
use crate::resolver::AssetResolver;

/// High-level helper assembling an [`AssetResolver`] from [`BunderSettings`].
///
/// Every collaborator can be replaced; anything left unset is derived from the settings, with
/// bundle definitions read from `bundlesConfigFilePath` below the content root.
pub struct BunderBuilder {
  settings: BunderSettings,
  content_root: PathBuf,
  bundling: Option<Box<dyn BundlingConfiguration>>,
  versioning: Option<Arc<dyn VersioningFormatter>>,
  formatter: Option<Arc<dyn PathFormatter>>,
  cache: Option<Arc<dyn ResolutionCache>>,
}

impl BunderBuilder {
  /// Start from `settings`, resolving relative files against the current directory.
  pub fn new(settings: BunderSettings) -> Self {
    Self {
      settings,
      content_root: PathBuf::from("."),
      bundling: None,
      versioning: None,
      formatter: None,
      cache: None,
    }
  }

  /// Directory the bundle definitions file is resolved against.
  pub fn content_root(mut self, root: impl AsRef<Path>) -> Self {
    self.content_root = root.as_ref().to_path_buf();
    self
  }

  /// Use these bundle definitions instead of the configured file.
  pub fn bundles(mut self, bundling: impl BundlingConfiguration + 'static) -> Self {
    self.bundling = Some(Box::new(bundling));
    self
  }

  /// Replace the default query string versioning.
  pub fn versioning(mut self, versioning: Arc<dyn VersioningFormatter>) -> Self {
    self.versioning = Some(versioning);
    self
  }

  /// Replace the default URL formatter entirely.
  pub fn path_formatter(mut self, formatter: Arc<dyn PathFormatter>) -> Self {
    self.formatter = Some(formatter);
    self
  }

  /// Replace the cache chosen by the settings.
  pub fn cache(mut self, cache: Arc<dyn ResolutionCache>) -> Self {
    self.cache = Some(cache);
    self
  }

  /// Load bundles and assemble the resolver.
  pub fn build(self) -> BunderResult<AssetResolver> {
    let Self {
      settings,
      content_root,
      bundling,
      versioning,
      formatter,
      cache,
    } = self;

    let bundles = match bundling {
      Some(bundling) => bundling.build()?,
      None => FileBundlingConfiguration::new(
        settings.bundles_config_path(&content_root),
        settings.output_directories.clone(),
      )
      .build()?,
    };
    let registry = BundleRegistry::new(bundles)?;

    let formatter: Arc<dyn PathFormatter> = match formatter {
      Some(formatter) => formatter,
      None => {
        let versioning = versioning.unwrap_or_else(|| default_versioning(&settings));
        let url_formatter = UrlPathFormatter::new(versioning);
        match settings.base_url.as_deref() {
          Some(base) => Arc::new(url_formatter.with_base(base)),
          None => Arc::new(url_formatter),
        }
      }
    };
    let cache = cache.unwrap_or_else(|| cache_from_settings(&settings.cache));

    Ok(AssetResolver::new(
      Arc::new(registry),
      formatter,
      cache,
      &settings,
    ))
  }
}

fn default_versioning(settings: &BunderSettings) -> Arc<dyn VersioningFormatter> {
  match settings.version.as_deref() {
    Some(version) => Arc::new(QueryStringVersioning::new(version)),
    None => {
      if settings.use_versioning {
        tracing::warn!("no `version` configured, versioned paths carry the bunder release instead");
      }
      Arc::new(QueryStringVersioning::default())
    }
  }
}
