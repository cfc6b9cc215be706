//! Domain validation errors.

use super::field::Field;
use thiserror::Error;

/// Errors that can occur while validating contact fields.
///
/// Raised when a contact is constructed or updated with a value that does
/// not satisfy the rule for its field. A failed validation never leaves a
/// partially built or partially updated contact behind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A first or last name does not start with an uppercase letter followed
    /// by at least two letters.
    #[error("Invalid {field}: {value:?} must start with an uppercase letter followed by at least two letters")]
    InvalidName { field: Field, value: String },

    /// An address, city or state is shorter than the minimum length.
    #[error("Invalid {field}: {value:?} must be at least {min} characters long")]
    TooShort {
        field: Field,
        value: String,
        min: usize,
    },

    /// The zip code is not exactly six digits.
    #[error("Invalid zip: {0:?} must be exactly 6 digits")]
    InvalidZip(String),

    /// The phone number does not match `DDD-DDD-DDDD`.
    #[error("Invalid phone number: {0:?} must match DDD-DDD-DDDD")]
    InvalidPhone(String),

    /// The email address is not of the form `local@domain.tld`.
    #[error("Invalid email address: {0:?}")]
    InvalidEmail(String),
}

impl ValidationError {
    /// The field that failed validation.
    pub fn field(&self) -> Field {
        match self {
            Self::InvalidName { field, .. } | Self::TooShort { field, .. } => *field,
            Self::InvalidZip(_) => Field::Zip,
            Self::InvalidPhone(_) => Field::Phone,
            Self::InvalidEmail(_) => Field::Email,
        }
    }
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
