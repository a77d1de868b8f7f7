//! Conversion from pathfinder DTOs to domain types.
//!
//! Every identifier on a transit edge is resolved through the lookup
//! repositories. Any edge that cannot be resolved fails the conversion;
//! nothing is skipped, so leg order always matches edge order.

use chrono::{DateTime, Utc};

use crate::domain::{
    DomainError, InvalidUnLocode, InvalidVoyageNumber, Itinerary, Leg, UnLocode, VoyageNumber,
};
use crate::pathfinder::{TransitEdge, TransitPath};
use crate::repository::{LocationRepository, VoyageRepository};

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// Edge carries a malformed location code
    #[error(transparent)]
    InvalidUnLocode(#[from] InvalidUnLocode),

    /// Edge carries a malformed voyage number
    #[error(transparent)]
    InvalidVoyageNumber(#[from] InvalidVoyageNumber),

    /// Failed to parse a timestamp
    #[error("invalid time: {0}")]
    InvalidTime(String),

    /// Location code is well formed but not known to us
    #[error("unknown location: {0}")]
    UnknownLocation(UnLocode),

    /// Voyage number is well formed but not known to us
    #[error("unknown voyage: {0}")]
    UnknownVoyage(VoyageNumber),

    /// The resulting legs do not form a valid itinerary
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Translate one transit path into an itinerary, one leg per edge.
pub fn to_itinerary<L, V>(
    path: &TransitPath,
    locations: &L,
    voyages: &V,
) -> Result<Itinerary, ConversionError>
where
    L: LocationRepository + ?Sized,
    V: VoyageRepository + ?Sized,
{
    let legs = path
        .transit_edges
        .iter()
        .map(|edge| to_leg(edge, locations, voyages))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Itinerary::new(legs)?)
}

/// Translate a single transit edge into a leg.
pub fn to_leg<L, V>(edge: &TransitEdge, locations: &L, voyages: &V) -> Result<Leg, ConversionError>
where
    L: LocationRepository + ?Sized,
    V: VoyageRepository + ?Sized,
{
    let number = VoyageNumber::new(edge.voyage_number.clone())?;
    let voyage = voyages
        .find(&number)
        .ok_or(ConversionError::UnknownVoyage(number))?;

    let from = UnLocode::parse(&edge.from_un_locode)?;
    let load_location = locations
        .find(&from)
        .ok_or(ConversionError::UnknownLocation(from))?;

    let to = UnLocode::parse(&edge.to_un_locode)?;
    let unload_location = locations
        .find(&to)
        .ok_or(ConversionError::UnknownLocation(to))?;

    let load_time = parse_timestamp(&edge.from_date)?;
    let unload_time = parse_timestamp(&edge.to_date)?;

    Ok(Leg::new(
        voyage,
        load_location,
        unload_location,
        load_time,
        unload_time,
    ))
}

/// Parse an ISO 8601 timestamp with an explicit offset.
///
/// Accepts RFC 3339 (`2024-03-01T08:00:00Z`, `...+01:00`) and the
/// colon-less offset form (`2024-03-01T08:00:00.000+0000`).
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, ConversionError> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .map(|t| t.with_timezone(&Utc))
        .map_err(|_| ConversionError::InvalidTime(s.to_string()))
}
