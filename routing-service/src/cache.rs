//! Caching layer for pathfinder responses.
//!
//! The graph traversal service answers the same (origin, destination)
//! question identically until its voyage schedule changes, so responses
//! can be reused for a short TTL. Failed lookups are never cached.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::domain::UnLocode;
use crate::pathfinder::{PathfinderError, TransitPath, TransitPathProvider};

/// Cache key for transit paths: (origin, destination).
type RouteKey = (UnLocode, UnLocode);

/// Cached pathfinder response.
type RouteEntry = Arc<Vec<TransitPath>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(300),
            max_capacity: 1000,
        }
    }
}

/// Pathfinder with caching.
///
/// Wraps any `TransitPathProvider` and caches its successful responses.
pub struct CachedPathfinder<P> {
    inner: P,
    routes: MokaCache<RouteKey, RouteEntry>,
}

impl<P: TransitPathProvider> CachedPathfinder<P> {
    /// Create a new cached pathfinder.
    pub fn new(inner: P, config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, routes }
    }

    /// Access the wrapped provider for operations that bypass cache.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_cache(&self) {
        self.routes.invalidate_all();
    }
}

impl<P: TransitPathProvider> TransitPathProvider for CachedPathfinder<P> {
    async fn find_shortest_path(
        &self,
        origin: &UnLocode,
        destination: &UnLocode,
    ) -> Result<Vec<TransitPath>, PathfinderError> {
        let key = (*origin, *destination);

        if let Some(cached) = self.routes.get(&key).await {
            trace!(%origin, %destination, "pathfinder cache hit");
            return Ok(cached.as_ref().clone());
        }

        let paths = self.inner.find_shortest_path(origin, destination).await?;
        self.routes.insert(key, Arc::new(paths.clone())).await;

        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pathfinder::{MockPathfinder, TransitEdge};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn code(s: &str) -> UnLocode {
        UnLocode::parse(s).unwrap()
    }

    fn sample_path() -> TransitPath {
        TransitPath::new(vec![TransitEdge {
            voyage_number: "V100".into(),
            from_un_locode: "SESTO".into(),
            to_un_locode: "FIHEL".into(),
            from_date: "2024-03-01T08:00:00Z".into(),
            to_date: "2024-03-02T08:00:00Z".into(),
        }])
    }

    /// Fails the first `failures` calls, then succeeds with no paths.
    struct FlakyProvider {
        failures: usize,
        calls: AtomicUsize,
    }

    impl TransitPathProvider for FlakyProvider {
        async fn find_shortest_path(
            &self,
            _origin: &UnLocode,
            _destination: &UnLocode,
        ) -> Result<Vec<TransitPath>, PathfinderError> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            if n < self.failures {
                Err(PathfinderError::RateLimited)
            } else {
                Ok(Vec::new())
            }
        }
    }

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(300));
        assert_eq!(config.max_capacity, 1000);
    }

    #[tokio::test]
    async fn second_lookup_served_from_cache() {
        let mock = MockPathfinder::new();
        mock.insert(code("SESTO"), code("FIHEL"), vec![sample_path()])
            .await;
        let cached = CachedPathfinder::new(mock, &CacheConfig::default());

        let first = cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await
            .unwrap();
        let second = cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await
            .unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 1);
        assert_eq!(cached.inner().query_count(), 1);
    }

    #[tokio::test]
    async fn key_includes_direction() {
        let cached = CachedPathfinder::new(MockPathfinder::new(), &CacheConfig::default());

        cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await
            .unwrap();
        cached
            .find_shortest_path(&code("FIHEL"), &code("SESTO"))
            .await
            .unwrap();

        assert_eq!(cached.inner().query_count(), 2);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let provider = FlakyProvider {
            failures: 1,
            calls: AtomicUsize::new(0),
        };
        let cached = CachedPathfinder::new(provider, &CacheConfig::default());

        let first = cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await;
        assert!(matches!(first, Err(PathfinderError::RateLimited)));

        let second = cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await;
        assert!(second.is_ok());
        assert_eq!(cached.inner().calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn invalidate_forces_refetch() {
        let cached = CachedPathfinder::new(MockPathfinder::new(), &CacheConfig::default());

        cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await
            .unwrap();
        cached.invalidate_cache();
        cached
            .find_shortest_path(&code("SESTO"), &code("FIHEL"))
            .await
            .unwrap();

        assert_eq!(cached.inner().query_count(), 2);
    }
}
