//! Voyage types.

use std::fmt;

/// Error returned when parsing an invalid voyage number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid voyage number: {reason}")]
pub struct InvalidVoyageNumber {
    reason: &'static str,
}

/// Identifier of a scheduled voyage, e.g. `"0100S"`.
///
/// Voyage numbers are opaque to this crate. The only validation is that they
/// are non-empty and contain no whitespace.
///
/// # Examples
///
/// ```
/// use routing_service::domain::VoyageNumber;
///
/// let number = VoyageNumber::new("0100S".to_string()).unwrap();
/// assert_eq!(number.as_str(), "0100S");
///
/// assert!(VoyageNumber::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct VoyageNumber(String);

impl VoyageNumber {
    /// Create a new voyage number from a string.
    pub fn new(s: String) -> Result<Self, InvalidVoyageNumber> {
        if s.is_empty() {
            return Err(InvalidVoyageNumber {
                reason: "voyage number cannot be empty",
            });
        }
        if s.chars().any(char::is_whitespace) {
            return Err(InvalidVoyageNumber {
                reason: "voyage number cannot contain whitespace",
            });
        }
        Ok(VoyageNumber(s))
    }

    /// Returns the voyage number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for VoyageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VoyageNumber({})", self.0)
    }
}

impl fmt::Display for VoyageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A voyage operated by a carrier. Identity is the voyage number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Voyage {
    number: VoyageNumber,
}

impl Voyage {
    pub fn new(number: VoyageNumber) -> Self {
        Self { number }
    }

    pub fn number(&self) -> &VoyageNumber {
        &self.number
    }
}
