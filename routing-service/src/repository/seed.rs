//! JSON seed data for the in-memory repositories.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::{Location, UnLocode, Voyage, VoyageNumber};

use super::error::SeedError;
use super::location::InMemoryLocationRepository;
use super::voyage::InMemoryVoyageRepository;

/// A location entry in the seed file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedLocation {
    pub unlocode: String,
    pub name: String,
}

/// Contents of a seed file.
///
/// ```json
/// {
///   "locations": [{ "unlocode": "SESTO", "name": "Stockholm" }],
///   "voyages": ["0100S"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Seed {
    #[serde(default)]
    pub locations: Vec<SeedLocation>,
    #[serde(default)]
    pub voyages: Vec<String>,
}

impl Seed {
    /// Read and parse a seed file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Parse seed data from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        serde_json::from_str(json).map_err(|e| SeedError::Json {
            message: e.to_string(),
        })
    }

    /// Validate every entry and build both repositories.
    ///
    /// Fails on the first malformed code or voyage number.
    pub fn into_repositories(
        self,
    ) -> Result<(InMemoryLocationRepository, InMemoryVoyageRepository), SeedError> {
        let locations = self
            .locations
            .into_iter()
            .map(|l| -> Result<Location, SeedError> {
                Ok(Location::new(UnLocode::parse(&l.unlocode)?, l.name))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let voyages = self
            .voyages
            .into_iter()
            .map(|v| -> Result<Voyage, SeedError> { Ok(Voyage::new(VoyageNumber::new(v)?)) })
            .collect::<Result<Vec<_>, _>>()?;

        let locations = InMemoryLocationRepository::new(locations);
        let voyages = InMemoryVoyageRepository::new(voyages);
        debug!(
            locations = locations.len(),
            voyages = voyages.len(),
            "repositories seeded"
        );

        Ok((locations, voyages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{LocationRepository, VoyageRepository};
    use tempfile::tempdir;

    #[test]
    fn load_bundled_seed() {
        let seed = Seed::load("data/seed.json").unwrap();
        let (locations, voyages) = seed.into_repositories().unwrap();

        let sto = locations.find(&UnLocode::parse("SESTO").unwrap()).unwrap();
        assert_eq!(sto.name(), "Stockholm");
        assert!(
            voyages
                .find(&VoyageNumber::new("V100".to_string()).unwrap())
                .is_some()
        );
    }

    #[test]
    fn load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("seed.json");
        std::fs::write(
            &path,
            r#"{"locations": [{"unlocode": "fihel", "name": "Helsinki"}], "voyages": ["V1"]}"#,
        )
        .unwrap();

        let (locations, voyages) = Seed::load(&path).unwrap().into_repositories().unwrap();
        assert_eq!(locations.len(), 1);
        assert_eq!(voyages.len(), 1);
        assert!(locations.find(&UnLocode::parse("FIHEL").unwrap()).is_some());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let (locations, voyages) = Seed::from_json("{}").unwrap().into_repositories().unwrap();
        assert!(locations.is_empty());
        assert!(voyages.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = Seed::load("/nonexistent/seed.json");
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[test]
    fn malformed_json_is_json_error() {
        assert!(matches!(
            Seed::from_json("{not json"),
            Err(SeedError::Json { .. })
        ));
    }

    #[test]
    fn invalid_location_code_rejected() {
        let seed = Seed::from_json(r#"{"locations": [{"unlocode": "XX", "name": "Nowhere"}]}"#)
            .unwrap();
        assert!(matches!(
            seed.into_repositories(),
            Err(SeedError::InvalidLocation(_))
        ));
    }

    #[test]
    fn invalid_voyage_rejected() {
        let seed = Seed::from_json(r#"{"voyages": [""]}"#).unwrap();
        assert!(matches!(
            seed.into_repositories(),
            Err(SeedError::InvalidVoyage(_))
        ));
    }
}
