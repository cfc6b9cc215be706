//! Registry of named address books.

use super::address_book::AddressBook;
use crate::domain::Field;
use crate::models::{Contact, Listing};
use tracing::{debug, info, warn};

/// Shown by [`AddressBookManager::list_address_books`] when no book exists.
pub const NO_BOOKS_MESSAGE: &str = "No address books found.";

/// Owns an ordered list of address books, addressed by name.
///
/// Book names are not required to be unique: creating a book under a name
/// that is already taken appends a second book, and lookups by name always
/// resolve to the first one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBookManager {
    books: Vec<AddressBook>,
}

impl AddressBookManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new empty book and return it.
    pub fn create_address_book(&mut self, name: impl Into<String>) -> &mut AddressBook {
        let name = name.into();
        if self.position(&name).is_some() {
            warn!(book = %name, "Address book name already in use, lookups will return the first");
        }
        info!(book = %name, "Address book created");

        self.books.push(AddressBook::new(name));
        let last = self.books.len() - 1;
        &mut self.books[last]
    }

    /// First book named exactly `name`.
    pub fn get_address_book(&self, name: &str) -> Option<&AddressBook> {
        let found = self.books.iter().find(|b| b.name() == name);
        debug!(book = %name, found = found.is_some(), "Address book lookup");
        found
    }

    /// Mutable access to the first book named exactly `name`.
    pub fn get_address_book_mut(&mut self, name: &str) -> Option<&mut AddressBook> {
        self.books.iter_mut().find(|b| b.name() == name)
    }

    /// Remove the first book named exactly `name`, handing it back.
    pub fn delete_address_book(&mut self, name: &str) -> Option<AddressBook> {
        let index = self.position(name)?;
        info!(book = %name, "Address book deleted");
        Some(self.books.remove(index))
    }

    /// Book names, numbered from 1 in creation order.
    pub fn list_address_books(&self) -> Listing {
        Listing::numbered(self.books.iter().map(AddressBook::name), NO_BOOKS_MESSAGE)
    }

    pub fn address_books(&self) -> &[AddressBook] {
        &self.books
    }

    /// Number of books.
    pub fn count(&self) -> usize {
        self.books.len()
    }

    /// Every contact in `city` across all books, as `(book name, contact)`
    /// pairs in book order then contact order.
    pub fn find_in_city(&self, city: &str) -> Vec<(&str, &Contact)> {
        self.find_by(Field::City, city)
    }

    /// Every contact in `state` across all books, as `(book name, contact)`
    /// pairs in book order then contact order.
    pub fn find_in_state(&self, state: &str) -> Vec<(&str, &Contact)> {
        self.find_by(Field::State, state)
    }

    fn find_by(&self, field: Field, value: &str) -> Vec<(&str, &Contact)> {
        let found: Vec<(&str, &Contact)> = self
            .books
            .iter()
            .flat_map(|book| {
                book.contacts()
                    .iter()
                    .filter(move |c| c.get(field) == value)
                    .map(move |c| (book.name(), c))
            })
            .collect();
        debug!(field = %field, value = %value, matches = found.len(), "Search across address books");
        found
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.books.iter().position(|b| b.name() == name)
    }
}
