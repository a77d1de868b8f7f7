//! Mock pathfinder for running without the graph traversal service.
//!
//! Serves canned transit paths, either inserted directly or loaded from
//! JSON files, as if they were live API responses.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::RwLock;

use crate::domain::UnLocode;

use super::error::PathfinderError;
use super::provider::TransitPathProvider;
use super::types::TransitPath;

type RouteKey = (UnLocode, UnLocode);

/// Mock pathfinder that serves pre-loaded transit paths.
#[derive(Clone, Default)]
pub struct MockPathfinder {
    /// Canned responses, keyed by (origin, destination).
    routes: Arc<RwLock<HashMap<RouteKey, Vec<TransitPath>>>>,
    /// Number of queries answered so far.
    queries: Arc<AtomicUsize>,
}

impl MockPathfinder {
    /// Create a mock with no routes. Every query returns no paths.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock by loading JSON files from a directory.
    ///
    /// Expects files named `{ORIGIN}-{DESTINATION}.json` (e.g.
    /// `CNHKG-SESTO.json`), each holding a service response body.
    pub fn from_dir(data_dir: impl AsRef<Path>) -> Result<Self, PathfinderError> {
        let data_dir = data_dir.as_ref();
        let mut routes = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            PathfinderError::NotConfigured(format!(
                "failed to read mock data directory {:?}: {}",
                data_dir, e
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                PathfinderError::NotConfigured(format!("failed to read directory entry: {}", e))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            let key = parse_route_key(stem).ok_or_else(|| {
                PathfinderError::NotConfigured(format!("invalid mock file name: {:?}", path))
            })?;

            let json = std::fs::read_to_string(&path).map_err(|e| {
                PathfinderError::NotConfigured(format!("failed to read {:?}: {}", path, e))
            })?;

            let paths: Vec<TransitPath> =
                serde_json::from_str(&json).map_err(|e| PathfinderError::Json {
                    message: format!("failed to parse {:?}: {}", path, e),
                    body: None,
                })?;

            routes.insert(key, paths);
        }

        if routes.is_empty() {
            return Err(PathfinderError::NotConfigured(format!(
                "no mock route files found in {:?}",
                data_dir
            )));
        }

        Ok(Self {
            routes: Arc::new(RwLock::new(routes)),
            queries: Arc::new(AtomicUsize::new(0)),
        })
    }

    /// Set the paths returned for a pair of locations.
    pub async fn insert(&self, origin: UnLocode, destination: UnLocode, paths: Vec<TransitPath>) {
        let mut routes = self.routes.write().await;
        routes.insert((origin, destination), paths);
    }

    /// List the (origin, destination) pairs with canned paths.
    pub async fn available_routes(&self) -> Vec<RouteKey> {
        let routes = self.routes.read().await;
        routes.keys().copied().collect()
    }

    /// Number of queries answered since creation.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl TransitPathProvider for MockPathfinder {
    async fn find_shortest_path(
        &self,
        origin: &UnLocode,
        destination: &UnLocode,
    ) -> Result<Vec<TransitPath>, PathfinderError> {
        self.queries.fetch_add(1, Ordering::Relaxed);
        let routes = self.routes.read().await;
        Ok(routes
            .get(&(*origin, *destination))
            .cloned()
            .unwrap_or_default())
    }
}

/// Parse "CNHKG-SESTO" into a route key.
fn parse_route_key(stem: &str) -> Option<RouteKey> {
    let (origin, destination) = stem.split_once('-')?;
    Some((
        UnLocode::parse(origin).ok()?,
        UnLocode::parse(destination).ok()?,
    ))
}
