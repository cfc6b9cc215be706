//! Address books and the manager that owns them.

mod address_book;
mod manager;
mod outcome;

pub use address_book::{AddressBook, EMPTY_BOOK_MESSAGE};
pub use manager::{AddressBookManager, NO_BOOKS_MESSAGE};
pub use outcome::{AddOutcome, DeleteOutcome, EditOutcome};
