//! Outcomes of address book operations.
//!
//! Duplicates and missing contacts are expected branches of normal use, so
//! they are reported as values rather than errors.

use crate::models::Contact;

/// Result of adding a contact to a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum AddOutcome {
    /// The contact was appended.
    Added,
    /// A contact with the same first and last name already exists; the book
    /// is unchanged.
    Duplicate,
}

impl AddOutcome {
    pub fn is_added(self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Result of editing a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EditOutcome {
    /// The update was applied.
    Updated,
    /// No contact has the given name; the book is unchanged.
    NotFound,
    /// The update would rename the contact onto another existing contact's
    /// name; the book is unchanged.
    NameTaken,
}

impl EditOutcome {
    pub fn is_updated(self) -> bool {
        matches!(self, EditOutcome::Updated)
    }
}

/// Result of deleting a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum DeleteOutcome {
    /// The contact was removed and is handed back to the caller.
    Deleted(Contact),
    /// No contact has the given name; the book is unchanged.
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, DeleteOutcome::Deleted(_))
    }
}
