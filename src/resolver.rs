//! Asset resolution engine: turns tokens into an ordered, de-duplicated list of assets.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::asset::Asset;
use crate::bundle::BundleLookup;
use crate::cache::ResolutionCache;
use crate::config::BunderSettings;
use crate::error::BunderResult;
use crate::format::PathFormatter;

/// Delimiters accepted between tokens supplied as a single string.
const TOKEN_DELIMITERS: [char; 3] = ['|', ';', ','];

/// One resolution request: the tokens plus the flags deciding how to render them.
///
/// Two requests with the same tokens and flags always resolve to the same assets, which is
/// what makes the whole value usable as a cache key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AssetResolutionContext {
  paths_or_bundles: Vec<String>,
  use_bundled_output: bool,
  include_versioning: bool,
}

impl AssetResolutionContext {
  /// Request with explicit flags.
  pub fn new<I, S>(paths_or_bundles: I, use_bundled_output: bool, include_versioning: bool) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      paths_or_bundles: paths_or_bundles.into_iter().map(Into::into).collect(),
      use_bundled_output,
      include_versioning,
    }
  }

  /// Request whose flags fall back to `settings` when no override is given.
  pub fn with_overrides<I, S>(
    paths_or_bundles: I,
    use_bundled_output: Option<bool>,
    include_versioning: Option<bool>,
    settings: &BunderSettings,
  ) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self::new(
      paths_or_bundles,
      use_bundled_output.unwrap_or(settings.use_bundled_output),
      include_versioning.unwrap_or(settings.use_versioning),
    )
  }

  /// Tokens in the order they were supplied.
  pub fn paths_or_bundles(&self) -> &[String] {
    &self.paths_or_bundles
  }

  /// Render known bundles as their single output file.
  pub fn use_bundled_output(&self) -> bool {
    self.use_bundled_output
  }

  /// Append a cache-busting marker to every resolved path.
  pub fn include_versioning(&self) -> bool {
    self.include_versioning
  }
}

/// Split a delimited token string on `|`, `;` or `,`.
///
/// Tokens are trimmed and blanks dropped; an absent value yields no tokens.
pub fn split_tokens(value: Option<&str>) -> Vec<String> {
  value
    .unwrap_or_default()
    .split(TOKEN_DELIMITERS)
    .map(str::trim)
    .filter(|token| !token.is_empty())
    .map(str::to_string)
    .collect()
}

/// Capability turning a resolution request into renderable assets.
pub trait AssetResolution: Send + Sync {
  /// Resolve the request into an ordered list of assets.
  fn resolve(&self, context: &AssetResolutionContext) -> BunderResult<Vec<Asset>>;
}

/// Default resolution engine backed by a bundle lookup, a path formatter and a cache.
#[derive(Clone)]
pub struct AssetResolver {
  bundles: Arc<dyn BundleLookup>,
  formatter: Arc<dyn PathFormatter>,
  cache: Arc<dyn ResolutionCache>,
  use_bundled_output: bool,
  include_versioning: bool,
}

impl AssetResolver {
  /// Create a resolver; `settings` supplies the flags used by [`AssetResolver::resolve_paths`].
  pub fn new(
    bundles: Arc<dyn BundleLookup>,
    formatter: Arc<dyn PathFormatter>,
    cache: Arc<dyn ResolutionCache>,
    settings: &BunderSettings,
  ) -> Self {
    Self {
      bundles,
      formatter,
      cache,
      use_bundled_output: settings.use_bundled_output,
      include_versioning: settings.use_versioning,
    }
  }

  /// Resolve tokens with the default flags and return only the resolved values.
  pub fn resolve_paths<I, S>(&self, paths_or_bundles: I) -> BunderResult<Vec<String>>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let context = AssetResolutionContext::new(
      paths_or_bundles,
      self.use_bundled_output,
      self.include_versioning,
    );

    Ok(
      self
        .resolve(&context)?
        .into_iter()
        .map(Asset::into_value)
        .collect(),
    )
  }

  fn resolve_uncached(&self, context: &AssetResolutionContext) -> BunderResult<Vec<Asset>> {
    let versioning = context.include_versioning();
    let mut assets = Vec::new();

    for token in context.paths_or_bundles() {
      match self.bundles.try_get_bundle(token) {
        Some(bundle) if context.use_bundled_output() => {
          let value = self
            .formatter
            .get_full_path(bundle.output_url(), versioning)?;
          tracing::trace!(bundle = bundle.name(), %value, "bundle output resolved");
          assets.push(Asset::for_bundle(value, bundle));
        }
        Some(bundle) => {
          for file in bundle.files() {
            assets.push(Asset::new(self.formatter.get_full_path(file, versioning)?));
          }
          tracing::trace!(bundle = bundle.name(), files = bundle.files().len(), "bundle expanded");
        }
        None => {
          tracing::debug!(%token, "no bundle registered, treating token as a path");
          assets.push(Asset::new(self.formatter.get_full_path(token, versioning)?));
        }
      }
    }

    Ok(remove_duplicates(assets))
  }
}

impl std::fmt::Debug for AssetResolver {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AssetResolver")
      .field("use_bundled_output", &self.use_bundled_output)
      .field("include_versioning", &self.include_versioning)
      .finish_non_exhaustive()
  }
}

impl AssetResolution for AssetResolver {
  fn resolve(&self, context: &AssetResolutionContext) -> BunderResult<Vec<Asset>> {
    if let Some(assets) = self.cache.get(context) {
      tracing::debug!(tokens = context.paths_or_bundles().len(), "resolution cache hit");
      return Ok(assets);
    }

    let assets = self.resolve_uncached(context)?;
    tracing::debug!(
      tokens = context.paths_or_bundles().len(),
      assets = assets.len(),
      "resolution cache miss"
    );
    self.cache.set(context.clone(), assets.clone());
    Ok(assets)
  }
}

/// Keep the first occurrence of every comparable value, preserving order.
///
/// Static and bundle-backed assets pass through untouched.
fn remove_duplicates(assets: Vec<Asset>) -> Vec<Asset> {
  let mut seen = BTreeSet::new();
  assets
    .into_iter()
    .filter(|asset| !asset.is_comparable() || seen.insert(asset.value().to_string()))
    .collect()
}
