//! Domain types for cargo routing.
//!
//! This module contains the core domain model types that the routing
//! adapter produces. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod itinerary;
mod leg;
mod location;
mod route_specification;
mod voyage;

pub use error::DomainError;
pub use itinerary::Itinerary;
pub use leg::Leg;
pub use location::{InvalidUnLocode, Location, UnLocode};
pub use route_specification::RouteSpecification;
pub use voyage::{InvalidVoyageNumber, Voyage, VoyageNumber};
