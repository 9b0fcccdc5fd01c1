//! Memoisation of resolution results.
//!
//! Caching is purely a latency optimisation: bundles never change for the lifetime of the
//! process, so a stored result stays valid until the cache itself is dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::asset::Asset;
use crate::config::CacheSettings;
use crate::resolver::AssetResolutionContext;

/// Storage for resolved asset lists keyed by the full resolution request.
pub trait ResolutionCache: Send + Sync {
  /// Previously stored result for `key`.
  fn get(&self, key: &AssetResolutionContext) -> Option<Vec<Asset>>;

  /// Remember `assets` as the result for `key`.
  fn set(&self, key: AssetResolutionContext, assets: Vec<Asset>);
}

/// Cache that never stores anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyCache;

impl ResolutionCache for EmptyCache {
  fn get(&self, _key: &AssetResolutionContext) -> Option<Vec<Asset>> {
    None
  }

  fn set(&self, _key: AssetResolutionContext, _assets: Vec<Asset>) {}
}

/// In-memory cache safe for concurrent readers and writers.
///
/// With a capacity set, keys arriving after the cache is full are resolved but not stored.
/// Slots are reserved atomically, so concurrent writers never push it past the limit.
#[derive(Debug, Default)]
pub struct ResolutionMemoryCache {
  entries: DashMap<AssetResolutionContext, Vec<Asset>>,
  stored: AtomicUsize,
  max_entries: Option<usize>,
}

impl ResolutionMemoryCache {
  /// Unbounded cache.
  pub fn new() -> Self {
    Self::default()
  }

  /// Cache that stops accepting new keys once `max_entries` are stored.
  pub fn with_capacity_limit(max_entries: usize) -> Self {
    Self {
      entries: DashMap::new(),
      stored: AtomicUsize::new(0),
      max_entries: Some(max_entries),
    }
  }

  /// Number of stored results.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Whether nothing is stored.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Drop every stored result.
  pub fn clear(&self) {
    self.entries.retain(|_, _| {
      self.stored.fetch_sub(1, Ordering::SeqCst);
      false
    });
  }

  fn try_reserve_slot(&self) -> bool {
    let max_entries = self.max_entries.unwrap_or(usize::MAX);
    self
      .stored
      .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |stored| {
        (stored < max_entries).then_some(stored + 1)
      })
      .is_ok()
  }
}

impl ResolutionCache for ResolutionMemoryCache {
  fn get(&self, key: &AssetResolutionContext) -> Option<Vec<Asset>> {
    self.entries.get(key).map(|entry| entry.value().clone())
  }

  fn set(&self, key: AssetResolutionContext, assets: Vec<Asset>) {
    match self.entries.entry(key) {
      Entry::Occupied(mut entry) => {
        entry.insert(assets);
      }
      Entry::Vacant(entry) => {
        if self.try_reserve_slot() {
          entry.insert(assets);
        } else {
          tracing::debug!(
            max_entries = self.max_entries,
            "resolution cache full, result not stored"
          );
        }
      }
    }
  }
}

/// Pick the cache implementation described by `settings`.
pub fn cache_from_settings(settings: &CacheSettings) -> Arc<dyn ResolutionCache> {
  match (settings.enabled, settings.max_entries) {
    (false, _) => Arc::new(EmptyCache),
    (true, Some(max_entries)) => Arc::new(ResolutionMemoryCache::with_capacity_limit(max_entries)),
    (true, None) => Arc::new(ResolutionMemoryCache::new()),
  }
}
