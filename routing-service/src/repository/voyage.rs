//! Voyage lookup by voyage number.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{Voyage, VoyageNumber};

/// Finds voyages by number.
pub trait VoyageRepository: Send + Sync {
    /// Returns the voyage with this number, if known.
    fn find(&self, number: &VoyageNumber) -> Option<Arc<Voyage>>;
}

/// Immutable in-memory voyage lookup. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoyageRepository {
    inner: Arc<HashMap<VoyageNumber, Arc<Voyage>>>,
}

impl InMemoryVoyageRepository {
    pub fn new(voyages: impl IntoIterator<Item = Voyage>) -> Self {
        let map = voyages
            .into_iter()
            .map(|v| (v.number().clone(), Arc::new(v)))
            .collect();
        Self {
            inner: Arc::new(map),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl VoyageRepository for InMemoryVoyageRepository {
    fn find(&self, number: &VoyageNumber) -> Option<Arc<Voyage>> {
        self.inner.get(number).cloned()
    }
}
