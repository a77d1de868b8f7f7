//! Transit path provider abstraction.

use std::future::Future;

use crate::domain::UnLocode;

use super::error::PathfinderError;
use super::types::TransitPath;

/// Source of candidate transit paths between two locations.
///
/// This abstraction allows the routing adapter to be tested with mock data
/// and to have caching layered in front of the HTTP client.
pub trait TransitPathProvider: Send + Sync {
    /// Find candidate paths from `origin` to `destination`.
    ///
    /// An empty list means the service found no route.
    fn find_shortest_path(
        &self,
        origin: &UnLocode,
        destination: &UnLocode,
    ) -> impl Future<Output = Result<Vec<TransitPath>, PathfinderError>> + Send;
}
