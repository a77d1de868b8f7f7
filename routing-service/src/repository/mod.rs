//! Location and voyage lookup.
//!
//! The routing adapter receives bare identifiers from the pathfinder and
//! resolves them to domain entities through these repositories. The
//! in-memory implementations are filled from a JSON seed file at startup.

mod error;
mod location;
mod seed;
mod voyage;

pub use error::SeedError;
pub use location::{InMemoryLocationRepository, LocationRepository};
pub use seed::{Seed, SeedLocation};
pub use voyage::{InMemoryVoyageRepository, VoyageRepository};
