//! Itinerary leg type.
//!
//! A `Leg` is one voyage segment: cargo is loaded onto a voyage at one
//! location and unloaded at another. It holds `Arc`s to the resolved
//! voyage and locations so itineraries share them with the repositories.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use super::{Location, Voyage};

/// A leg of an itinerary (one voyage).
#[derive(Debug, Clone)]
pub struct Leg {
    voyage: Arc<Voyage>,
    load_location: Arc<Location>,
    unload_location: Arc<Location>,
    load_time: DateTime<Utc>,
    unload_time: DateTime<Utc>,
}

impl Leg {
    /// Construct a leg from already resolved voyage and locations.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use chrono::{TimeZone, Utc};
    /// use routing_service::domain::{Leg, Location, UnLocode, Voyage, VoyageNumber};
    ///
    /// let voyage = Arc::new(Voyage::new(VoyageNumber::new("0100S".into()).unwrap()));
    /// let sto = Arc::new(Location::new(UnLocode::parse("SESTO").unwrap(), "Stockholm"));
    /// let hel = Arc::new(Location::new(UnLocode::parse("FIHEL").unwrap(), "Helsinki"));
    ///
    /// let leg = Leg::new(
    ///     voyage,
    ///     sto,
    ///     hel,
    ///     Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
    ///     Utc.with_ymd_and_hms(2024, 3, 2, 6, 0, 0).unwrap(),
    /// );
    ///
    /// assert_eq!(leg.load_location().name(), "Stockholm");
    /// assert_eq!(leg.duration().num_hours(), 22);
    /// ```
    pub fn new(
        voyage: Arc<Voyage>,
        load_location: Arc<Location>,
        unload_location: Arc<Location>,
        load_time: DateTime<Utc>,
        unload_time: DateTime<Utc>,
    ) -> Self {
        Leg {
            voyage,
            load_location,
            unload_location,
            load_time,
            unload_time,
        }
    }

    /// Returns the voyage this leg is on.
    pub fn voyage(&self) -> &Arc<Voyage> {
        &self.voyage
    }

    /// Returns where the cargo is loaded.
    pub fn load_location(&self) -> &Arc<Location> {
        &self.load_location
    }

    /// Returns where the cargo is unloaded.
    pub fn unload_location(&self) -> &Arc<Location> {
        &self.unload_location
    }

    pub fn load_time(&self) -> DateTime<Utc> {
        self.load_time
    }

    pub fn unload_time(&self) -> DateTime<Utc> {
        self.unload_time
    }

    /// Time on board, from load to unload.
    pub fn duration(&self) -> Duration {
        self.unload_time - self.load_time
    }
}
