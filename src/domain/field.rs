//! Contact field names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight fields every contact carries.
///
/// Used to label validation failures, list the fields touched by an update
/// and select sort and grouping keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Address,
    City,
    State,
    Zip,
    Phone,
    Email,
}

impl Field {
    /// All fields in validation order.
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::City,
        Field::State,
        Field::Zip,
        Field::Phone,
        Field::Email,
    ];

    /// Human readable label, as used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Zip => "zip",
            Field::Phone => "phone",
            Field::Email => "email",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_order() {
        assert_eq!(Field::ALL[0], Field::FirstName);
        assert_eq!(Field::ALL[7], Field::Email);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::FirstName.to_string(), "first name");
        assert_eq!(Field::Zip.to_string(), "zip");
    }

    #[test]
    fn test_field_serialization() {
        let json = serde_json::to_string(&Field::LastName).unwrap();
        assert_eq!(json, "\"last_name\"");
    }
}
