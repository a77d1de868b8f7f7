//! Itinerary type.
//!
//! An `Itinerary` is the planned transport of a cargo: the ordered legs it
//! will travel on from its first load to its final unload.

use chrono::{DateTime, Duration, Utc};

use super::{DomainError, Leg, Location};

/// An ordered, non-empty sequence of legs.
///
/// # Invariants
///
/// - At least one leg
/// - Leg order is exactly the order given at construction
#[derive(Debug, Clone)]
pub struct Itinerary {
    legs: Vec<Leg>,
}

impl Itinerary {
    /// Constructs an itinerary from legs in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err(DomainError::EmptyItinerary)` if `legs` is empty.
    pub fn new(legs: Vec<Leg>) -> Result<Self, DomainError> {
        if legs.is_empty() {
            return Err(DomainError::EmptyItinerary);
        }
        Ok(Itinerary { legs })
    }

    /// Returns all legs in order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    /// Always false: itineraries are non-empty by construction.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    fn first_leg(&self) -> &Leg {
        &self.legs[0]
    }

    fn last_leg(&self) -> &Leg {
        &self.legs[self.legs.len() - 1]
    }

    /// Where the cargo is first loaded.
    pub fn initial_departure_location(&self) -> &Location {
        self.first_leg().load_location()
    }

    /// Where the cargo is finally unloaded.
    pub fn final_arrival_location(&self) -> &Location {
        self.last_leg().unload_location()
    }

    /// When the cargo is first loaded.
    pub fn initial_departure_date(&self) -> DateTime<Utc> {
        self.first_leg().load_time()
    }

    /// When the cargo is finally unloaded.
    pub fn final_arrival_date(&self) -> DateTime<Utc> {
        self.last_leg().unload_time()
    }

    /// Time from first load to final unload, including time spent waiting
    /// between legs.
    pub fn total_duration(&self) -> Duration {
        self.final_arrival_date() - self.initial_departure_date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UnLocode, Voyage, VoyageNumber};
    use chrono::TimeZone;
    use std::sync::Arc;

    fn location(code: &str) -> Arc<Location> {
        Arc::new(Location::new(UnLocode::parse(code).unwrap(), code))
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    fn leg(voyage: &str, from: &str, to: &str, load: DateTime<Utc>, unload: DateTime<Utc>) -> Leg {
        let voyage = Arc::new(Voyage::new(VoyageNumber::new(voyage.into()).unwrap()));
        Leg::new(voyage, location(from), location(to), load, unload)
    }

    #[test]
    fn single_leg() {
        let itinerary = Itinerary::new(vec![leg("V1", "SESTO", "FIHEL", at(1, 8), at(2, 6))]).unwrap();

        assert_eq!(itinerary.len(), 1);
        assert!(!itinerary.is_empty());
        assert_eq!(itinerary.initial_departure_location().unlocode().as_str(), "SESTO");
        assert_eq!(itinerary.final_arrival_location().unlocode().as_str(), "FIHEL");
        assert_eq!(itinerary.initial_departure_date(), at(1, 8));
        assert_eq!(itinerary.final_arrival_date(), at(2, 6));
        assert_eq!(itinerary.total_duration(), Duration::hours(22));
    }

    #[test]
    fn multi_leg_endpoints() {
        let itinerary = Itinerary::new(vec![
            leg("V1", "CNHKG", "USLBG", at(1, 0), at(10, 0)),
            leg("V2", "USLBG", "USDAL", at(11, 0), at(12, 0)),
            leg("V3", "USDAL", "SESTO", at(13, 0), at(20, 0)),
        ])
        .unwrap();

        assert_eq!(itinerary.len(), 3);
        assert_eq!(itinerary.initial_departure_location().unlocode().as_str(), "CNHKG");
        assert_eq!(itinerary.final_arrival_location().unlocode().as_str(), "SESTO");
        assert_eq!(itinerary.final_arrival_date(), at(20, 0));
    }

    #[test]
    fn legs_keep_order() {
        let itinerary = Itinerary::new(vec![
            leg("A", "CNHKG", "USLBG", at(1, 0), at(2, 0)),
            leg("B", "USLBG", "USDAL", at(3, 0), at(4, 0)),
        ])
        .unwrap();

        let voyages: Vec<_> = itinerary
            .legs()
            .iter()
            .map(|l| l.voyage().number().as_str())
            .collect();
        assert_eq!(voyages, vec!["A", "B"]);
    }

    #[test]
    fn empty_itinerary_rejected() {
        let result = Itinerary::new(vec![]);
        assert!(matches!(result, Err(DomainError::EmptyItinerary)));
    }
}
