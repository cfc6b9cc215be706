//! PersonName value object.

use super::errors::{ValidationError, ValidationResult};
use super::field::Field;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]{2,}$").expect("Failed to compile name regex"));

/// A first or last name.
///
/// Must start with an ASCII uppercase letter followed by at least two more
/// ASCII letters. The field it belongs to is only used for error reporting,
/// so two names with the same text compare equal regardless of field.
///
/// # Example
///
/// ```
/// use address_book::domain::{Field, PersonName};
///
/// let name = PersonName::new(Field::FirstName, "Rahul").unwrap();
/// assert_eq!(name.as_str(), "Rahul");
/// assert!(PersonName::new(Field::LastName, "sharan").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PersonName(String);

impl PersonName {
    /// Create a new PersonName for the given field.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` citing `field` if the value
    /// does not match the name pattern.
    pub fn new(field: Field, name: impl Into<String>) -> ValidationResult<Self> {
        let name = name.into();

        if !NAME_REGEX.is_match(&name) {
            return Err(ValidationError::InvalidName { field, value: name });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for PersonName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(PersonName::new(Field::FirstName, "Ann").is_ok());
        assert!(PersonName::new(Field::FirstName, "McDonald").is_ok());
        assert!(PersonName::new(Field::LastName, "Sharan").is_ok());
    }

    #[test]
    fn test_name_validates_format() {
        assert!(PersonName::new(Field::FirstName, "rahul").is_err());
        assert!(PersonName::new(Field::FirstName, "Al").is_err());
        assert!(PersonName::new(Field::FirstName, "").is_err());
        assert!(PersonName::new(Field::FirstName, "O'Neil").is_err());
        assert!(PersonName::new(Field::FirstName, "Jean-Luc").is_err());
        assert!(PersonName::new(Field::FirstName, "Ann1").is_err());
        assert!(PersonName::new(Field::FirstName, "Émile").is_err());
    }

    #[test]
    fn test_name_error_cites_field() {
        let err = PersonName::new(Field::LastName, "x").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                field: Field::LastName,
                value: "x".to_string(),
            }
        );
    }
}
