//! Location types.

use std::fmt;

/// Error returned when parsing an invalid UN/LOCODE.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid UN/LOCODE {input:?}: {reason}")]
pub struct InvalidUnLocode {
    input: String,
    reason: &'static str,
}

/// A valid 5-character UN/LOCODE location identifier.
///
/// The first two characters are the country code (letters), the last three
/// identify the place within the country (letters or digits 2-9). Input is
/// case-insensitive and stored in upper case.
///
/// # Examples
///
/// ```
/// use routing_service::domain::UnLocode;
///
/// let stockholm = UnLocode::parse("SESTO").unwrap();
/// assert_eq!(stockholm.as_str(), "SESTO");
///
/// // Lowercase is normalised
/// assert_eq!(UnLocode::parse("sesto").unwrap(), stockholm);
///
/// // Wrong length is rejected
/// assert!(UnLocode::parse("SEST").is_err());
/// assert!(UnLocode::parse("SESTOO").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnLocode([u8; 5]);

impl UnLocode {
    /// Parse a UN/LOCODE from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidUnLocode> {
        let invalid = |reason| InvalidUnLocode {
            input: s.to_string(),
            reason,
        };

        let bytes = s.as_bytes();
        if bytes.len() != 5 {
            return Err(invalid("must be exactly 5 characters"));
        }

        let mut code = [0u8; 5];
        for (i, &b) in bytes.iter().enumerate() {
            let upper = b.to_ascii_uppercase();
            let valid = if i < 2 {
                upper.is_ascii_uppercase()
            } else {
                upper.is_ascii_uppercase() || (b'2'..=b'9').contains(&upper)
            };
            if !valid {
                return Err(invalid(if i < 2 {
                    "country code must be letters A-Z"
                } else {
                    "location code must be letters A-Z or digits 2-9"
                }));
            }
            code[i] = upper;
        }

        Ok(UnLocode(code))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored.
        std::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the two-letter country part of the code.
    pub fn country(&self) -> &str {
        &self.as_str()[..2]
    }
}

impl fmt::Debug for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnLocode({})", self.as_str())
    }
}

impl fmt::Display for UnLocode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named location, identified by its UN/LOCODE.
#[derive(Debug, Clone)]
pub struct Location {
    unlocode: UnLocode,
    name: String,
}

impl Location {
    /// Creates a new location.
    pub fn new(unlocode: UnLocode, name: impl Into<String>) -> Self {
        Self {
            unlocode,
            name: name.into(),
        }
    }

    /// Returns the location's identifier.
    pub fn unlocode(&self) -> &UnLocode {
        &self.unlocode
    }

    /// Returns the human readable name, e.g. "Stockholm".
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Two locations are the same entity iff their codes match.
    pub fn same_identity_as(&self, other: &Location) -> bool {
        self.unlocode == other.unlocode
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Location {}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.unlocode)
    }
}
