//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for every contact field rule:
//! names, localities (address, city, state), zip codes, phone numbers and
//! email addresses. These value objects validate at construction time and
//! prevent invalid data from being represented in the system.

pub mod email;
pub mod errors;
pub mod field;
pub mod locality;
pub mod name;
pub mod phone;
pub mod zip;

pub use email::EmailAddress;
pub use errors::{ValidationError, ValidationResult};
pub use field::Field;
pub use locality::{Locality, MIN_LOCALITY_LEN};
pub use name::PersonName;
pub use phone::PhoneNumber;
pub use zip::ZipCode;
