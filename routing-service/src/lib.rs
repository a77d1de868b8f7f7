//! Cargo routing adapter.
//!
//! Translates a route specification into a query against an external
//! pathfinding service and turns the transit paths it returns into
//! itineraries, keeping only those that satisfy the specification.

pub mod cache;
pub mod domain;
pub mod pathfinder;
pub mod repository;
pub mod routing;
