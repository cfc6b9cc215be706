//! Locality value object (address, city, state).

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use serde::{Serialize, Serializer};
use std::fmt;

/// Minimum number of characters for an address, city or state.
pub const MIN_LOCALITY_LEN: usize = 4;

/// A free-text location field: street address, city or state.
///
/// The only rule is a minimum length of [`MIN_LOCALITY_LEN`] characters,
/// counted as Unicode scalar values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locality(String);

impl Locality {
    /// Create a new Locality for the given field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::TooShort` citing `field` if the value has
    /// fewer than [`MIN_LOCALITY_LEN`] characters.
    pub fn new(field: Field, value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();

        if value.chars().count() < MIN_LOCALITY_LEN {
            return Err(ValidationError::TooShort {
                field,
                value,
                min: MIN_LOCALITY_LEN,
            });
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for Locality {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for Locality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
