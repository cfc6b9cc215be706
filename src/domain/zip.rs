//! ZipCode value object.

use super::errors::{ValidationError, ValidationResult};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;

static ZIP_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6}$").expect("Failed to compile zip regex"));

/// A six digit postal code.
///
/// Kept as a string so leading zeros survive and ordering is lexicographic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ZipCode(String);

impl ZipCode {
    /// Create a new ZipCode.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidZip` unless the value is exactly six
    /// ASCII digits.
    pub fn new(zip: impl Into<String>) -> ValidationResult<Self> {
        let zip = zip.into();

        if !ZIP_REGEX.is_match(&zip) {
            return Err(ValidationError::InvalidZip(zip));
        }

        Ok(Self(zip))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Serialize for ZipCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl fmt::Display for ZipCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
