//! Route lookup for cargo.
//!
//! The [`ExternalRoutingService`] is a data model translation layer between
//! our domain model and the pathfinder API, which operates in a different
//! context from us.

mod convert;
mod error;
mod service;

pub use convert::{ConversionError, parse_timestamp, to_itinerary, to_leg};
pub use error::RoutingError;
pub use service::{ExternalRoutingService, RoutingService};
