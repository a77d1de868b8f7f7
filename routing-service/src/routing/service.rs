//! The routing adapter.
//!
//! Our end of the routing service: picks a route specification apart into
//! a pathfinder query, then translates the answer back into itineraries.
//! The pathfinder works in a different context from us, so whatever it
//! returns is checked against the specification before it is handed on.

use std::future::Future;

use tracing::{debug, trace};

use crate::domain::{Itinerary, RouteSpecification};
use crate::pathfinder::TransitPathProvider;
use crate::repository::{LocationRepository, VoyageRepository};

use super::convert::to_itinerary;
use super::error::RoutingError;

/// Finds itineraries that satisfy a route specification.
pub trait RoutingService: Send + Sync {
    /// Fetch candidate itineraries for `spec`.
    ///
    /// Every returned itinerary satisfies `spec`.
    fn fetch_routes_for_specification(
        &self,
        spec: &RouteSpecification,
    ) -> impl Future<Output = Result<Vec<Itinerary>, RoutingError>> + Send;
}

/// Routing service backed by an external pathfinder.
#[derive(Debug, Clone)]
pub struct ExternalRoutingService<P, L, V> {
    pathfinder: P,
    locations: L,
    voyages: V,
}

impl<P, L, V> ExternalRoutingService<P, L, V>
where
    P: TransitPathProvider,
    L: LocationRepository,
    V: VoyageRepository,
{
    /// Create a routing service from its three collaborators.
    pub fn new(pathfinder: P, locations: L, voyages: V) -> Self {
        Self {
            pathfinder,
            locations,
            voyages,
        }
    }

    /// The underlying pathfinder.
    pub fn pathfinder(&self) -> &P {
        &self.pathfinder
    }
}

impl<P, L, V> RoutingService for ExternalRoutingService<P, L, V>
where
    P: TransitPathProvider,
    L: LocationRepository,
    V: VoyageRepository,
{
    async fn fetch_routes_for_specification(
        &self,
        spec: &RouteSpecification,
    ) -> Result<Vec<Itinerary>, RoutingError> {
        let origin = spec.origin().unlocode();
        let destination = spec.destination().unlocode();

        let paths = self
            .pathfinder
            .find_shortest_path(origin, destination)
            .await?;
        trace!(%origin, %destination, paths = paths.len(), "transit paths received");

        let mut itineraries = Vec::with_capacity(paths.len());

        for (index, path) in paths.iter().enumerate() {
            let itinerary = to_itinerary(path, &self.locations, &self.voyages)
                .map_err(|source| RoutingError::Conversion { index, source })?;

            if spec.is_satisfied_by(&itinerary) {
                itineraries.push(itinerary);
            } else {
                debug!(
                    index,
                    %origin,
                    %destination,
                    "received itinerary that did not satisfy the route specification"
                );
            }
        }

        Ok(itineraries)
    }
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod tests;
