//! Memoized finder instances.
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::registry::FinderRegistry;
use super::{FinderOptions, PathFinder};
use crate::config::ConfigError;

/// One finder instance per [`FinderOptions`].
///
/// Finders are stateless between calls, so a cached instance can serve every
/// search with the same options. Only the finder is cached; grids are built
/// per call.
#[derive(Debug, Default)]
pub struct FinderCache {
    entries: Mutex<HashMap<FinderOptions, Arc<dyn PathFinder>>>,
}

static GLOBAL: OnceLock<Arc<FinderCache>> = OnceLock::new();

impl FinderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide cache shared by sessions using the built-in registry.
    pub fn global() -> Arc<FinderCache> {
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(FinderCache::new())))
    }

    /// Returns the cached finder for `options`, constructing it through
    /// `registry` on first use.
    pub fn get_or_create(
        &self,
        registry: &FinderRegistry,
        options: &FinderOptions,
    ) -> Result<Arc<dyn PathFinder>, ConfigError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(finder) = entries.get(options) {
            return Ok(Arc::clone(finder));
        }

        let finder = registry.construct(options)?;
        debug!(%options, finder = finder.name(), "constructed finder");
        entries.insert(options.clone(), Arc::clone(&finder));
        Ok(finder)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_options_share_instance() {
        let cache = FinderCache::new();
        let registry = FinderRegistry::builtin();
        let options = FinderOptions::new("astar", true);

        let a = cache.get_or_create(&registry, &options).unwrap();
        let b = cache.get_or_create(&registry, &options).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        let c = cache
            .get_or_create(&registry, &FinderOptions::new("astar", false))
            .unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn unknown_algorithm_is_not_cached() {
        let cache = FinderCache::new();
        let registry = FinderRegistry::builtin();
        let err = cache
            .get_or_create(&registry, &FinderOptions::new("nope", true))
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAlgorithm { .. }));
        assert!(cache.is_empty());
    }

    #[test]
    fn global_is_shared() {
        assert!(Arc::ptr_eq(&FinderCache::global(), &FinderCache::global()));
    }
}
