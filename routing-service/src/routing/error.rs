//! Routing error types.

use crate::pathfinder::PathfinderError;

use super::convert::ConversionError;

/// Errors from fetching routes for a specification.
///
/// Nothing here is retried or recovered locally; the caller decides.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// The pathfinder call failed (network, status, or body)
    #[error("pathfinder request failed: {0}")]
    Pathfinder(#[from] PathfinderError),

    /// A returned path could not be translated into an itinerary
    #[error("transit path {index} could not be converted: {source}")]
    Conversion {
        index: usize,
        #[source]
        source: ConversionError,
    },
}
