//! Graph traversal ("pathfinder") service client.
//!
//! The pathfinder is an external service owned by another team. It answers
//! "how can cargo get from A to B" with a list of transit paths, each an
//! ordered list of voyage hops. This module only speaks its wire format;
//! translation into domain types happens in [`crate::routing`].

mod client;
mod error;
mod mock;
mod provider;
mod types;

pub use client::{DEFAULT_BASE_URL, PathfinderClient, PathfinderConfig};
pub use error::PathfinderError;
pub use mock::MockPathfinder;
pub use provider::TransitPathProvider;
pub use types::{TransitEdge, TransitPath};
