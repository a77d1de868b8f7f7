//! Location lookup by UN/LOCODE.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Location, UnLocode};

/// Finds locations by code.
pub trait LocationRepository: Send + Sync {
    /// Returns the location with this code, if known.
    fn find(&self, unlocode: &UnLocode) -> Option<Arc<Location>>;
}

/// Immutable in-memory location lookup. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryLocationRepository {
    inner: Arc<HashMap<UnLocode, Arc<Location>>>,
}

impl InMemoryLocationRepository {
    /// Build a repository from locations. Later duplicates win.
    pub fn new(locations: impl IntoIterator<Item = Location>) -> Self {
        let map = locations
            .into_iter()
            .map(|l| (*l.unlocode(), Arc::new(l)))
            .collect();
        Self {
            inner: Arc::new(map),
        }
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl LocationRepository for InMemoryLocationRepository {
    fn find(&self, unlocode: &UnLocode) -> Option<Arc<Location>> {
        self.inner.get(unlocode).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> UnLocode {
        UnLocode::parse(s).unwrap()
    }

    #[test]
    fn find_known_and_unknown() {
        let repo = InMemoryLocationRepository::new(vec![
            Location::new(code("SESTO"), "Stockholm"),
            Location::new(code("FIHEL"), "Helsinki"),
        ]);

        assert_eq!(repo.len(), 2);
        assert_eq!(repo.find(&code("SESTO")).unwrap().name(), "Stockholm");
        assert!(repo.find(&code("USNYC")).is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let repo = InMemoryLocationRepository::new(vec![
            Location::new(code("SESTO"), "Old name"),
            Location::new(code("SESTO"), "Stockholm"),
        ]);

        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find(&code("SESTO")).unwrap().name(), "Stockholm");
    }

    #[test]
    fn clones_share_entries() {
        let repo = InMemoryLocationRepository::new(vec![Location::new(code("SESTO"), "Stockholm")]);
        let copy = repo.clone();

        let a = repo.find(&code("SESTO")).unwrap();
        let b = copy.find(&code("SESTO")).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn empty_repository() {
        let repo = InMemoryLocationRepository::default();
        assert!(repo.is_empty());
        assert!(repo.find(&code("SESTO")).is_none());
    }
}
