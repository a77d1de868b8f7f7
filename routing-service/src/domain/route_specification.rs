//! Route specification.
//!
//! Describes where a cargo must go and by when. The routing adapter uses
//! it both to build the pathfinder query and to reject itineraries that
//! the external service should not have returned.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{DomainError, Itinerary, Location};

/// Required origin, destination and arrival deadline for a cargo.
///
/// # Invariants
///
/// - Origin and destination are different locations
#[derive(Debug, Clone)]
pub struct RouteSpecification {
    origin: Arc<Location>,
    destination: Arc<Location>,
    arrival_deadline: DateTime<Utc>,
}

impl RouteSpecification {
    /// Creates a route specification.
    ///
    /// # Errors
    ///
    /// Returns `Err(DomainError::SameOriginAndDestination)` if origin and
    /// destination are the same location.
    pub fn new(
        origin: Arc<Location>,
        destination: Arc<Location>,
        arrival_deadline: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if origin.same_identity_as(&destination) {
            return Err(DomainError::SameOriginAndDestination(*origin.unlocode()));
        }
        Ok(Self {
            origin,
            destination,
            arrival_deadline,
        })
    }

    pub fn origin(&self) -> &Arc<Location> {
        &self.origin
    }

    pub fn destination(&self) -> &Arc<Location> {
        &self.destination
    }

    pub fn arrival_deadline(&self) -> DateTime<Utc> {
        self.arrival_deadline
    }

    /// Returns true if the itinerary starts at the origin, ends at the
    /// destination, and arrives strictly before the deadline.
    pub fn is_satisfied_by(&self, itinerary: &Itinerary) -> bool {
        self.origin
            .same_identity_as(itinerary.initial_departure_location())
            && self
                .destination
                .same_identity_as(itinerary.final_arrival_location())
            && itinerary.final_arrival_date() < self.arrival_deadline
    }
}
