//! Pathfinder API response DTOs.
//!
//! These types map directly to the graph traversal service's JSON. Times are
//! kept as strings here and parsed during conversion, so one bad edge is
//! reported with the offending value rather than as an opaque serde error.

use serde::{Deserialize, Serialize};

/// One candidate route returned by the pathfinder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitPath {
    /// Edges in travel order. The service omits the field for empty paths.
    #[serde(default)]
    pub transit_edges: Vec<TransitEdge>,
}

impl TransitPath {
    pub fn new(transit_edges: Vec<TransitEdge>) -> Self {
        Self { transit_edges }
    }
}

/// A single voyage hop between two locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitEdge {
    /// Voyage the cargo travels on.
    pub voyage_number: String,

    /// UN/LOCODE where the cargo is loaded.
    pub from_un_locode: String,

    /// UN/LOCODE where the cargo is unloaded.
    pub to_un_locode: String,

    /// Load time (ISO 8601).
    pub from_date: String,

    /// Unload time (ISO 8601).
    pub to_date: String,
}
