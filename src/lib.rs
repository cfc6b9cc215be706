//! Address Book - validated contact records grouped into named address books.
//!
//! This library provides contact validation, duplicate detection,
//! lookup/edit/delete, and aggregate reporting (counts and sorting by city,
//! state and zip) over in-memory address books.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects for each contact field, and `ValidationError`
//! - **models**: The `Contact` record, its partial update, and report types
//! - **book**: `AddressBook` and `AddressBookManager`, with outcome enums for
//!   expected branches such as duplicates and missing contacts
//! - **error**: Application-level error types
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddOutcome, AddressBookManager, Contact};
//!
//! let mut manager = AddressBookManager::new();
//! let book = manager.create_address_book("Friends");
//!
//! let contact = Contact::new(
//!     "Rahul", "Sharan", "435 Street", "Indore", "Madhya Pradesh",
//!     "235456", "123-456-7890", "rahulsh@example.com",
//! )?;
//! assert_eq!(book.add_contact(contact.clone()), AddOutcome::Added);
//! assert_eq!(book.add_contact(contact), AddOutcome::Duplicate);
//! assert_eq!(book.count_contacts(), 1);
//! # Ok::<(), address_book::ValidationError>(())
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

pub use book::{AddOutcome, AddressBook, AddressBookManager, DeleteOutcome, EditOutcome};
pub use config::{Config, OutputFormat};
pub use domain::{Field, ValidationError, ValidationResult};
pub use error::{ConfigError, ConfigResult};
pub use models::{Contact, ContactRecord, ContactUpdate, GroupCounts, Listing};
