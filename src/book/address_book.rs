//! A named, ordered collection of unique contacts.

use super::outcome::{AddOutcome, DeleteOutcome, EditOutcome};
use crate::domain::{Field, ValidationResult};
use crate::models::{Contact, ContactUpdate, GroupCounts, Listing};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Shown by [`AddressBook::list_contacts`] when the book has no contacts.
pub const EMPTY_BOOK_MESSAGE: &str = "No contacts found.";

/// A named address book.
///
/// Contacts keep their insertion order until one of the `sort_by_*`
/// methods reorders them. No two contacts share the same
/// `(first_name, last_name)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressBook {
    name: String,
    contacts: Vec<Contact>,
}

impl AddressBook {
    /// Create an empty book.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contacts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contacts in current book order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Append a contact unless one with the same name already exists.
    pub fn add_contact(&mut self, contact: Contact) -> AddOutcome {
        if self.position(contact.first_name(), contact.last_name()).is_some() {
            warn!(
                book = %self.name,
                first_name = %contact.first_name(),
                last_name = %contact.last_name(),
                "Duplicate contact rejected"
            );
            return AddOutcome::Duplicate;
        }

        info!(
            book = %self.name,
            first_name = %contact.first_name(),
            last_name = %contact.last_name(),
            "Contact added"
        );
        self.contacts.push(contact);
        AddOutcome::Added
    }

    /// First contact whose first and last name match exactly.
    pub fn find_contact(&self, first_name: &str, last_name: &str) -> Option<&Contact> {
        let found = self
            .contacts
            .iter()
            .find(|c| c.matches_name(first_name, last_name));
        debug!(
            book = %self.name,
            first_name = %first_name,
            last_name = %last_name,
            found = found.is_some(),
            "Contact lookup"
        );
        found
    }

    /// Apply a partial update to the named contact.
    ///
    /// # Errors
    ///
    /// Returns the `ValidationError` of the first invalid field in `update`.
    /// The contact is left unchanged in that case.
    pub fn edit_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        update: ContactUpdate,
    ) -> ValidationResult<EditOutcome> {
        let Some(index) = self.position(first_name, last_name) else {
            debug!(book = %self.name, first_name = %first_name, last_name = %last_name, "Edit target not found");
            return Ok(EditOutcome::NotFound);
        };

        let fields = update.fields();
        let mut edited = self.contacts[index].clone();
        edited.update_details(update)?;

        let renamed = !edited.matches_name(first_name, last_name);
        if renamed && self.position(edited.first_name(), edited.last_name()).is_some() {
            warn!(
                book = %self.name,
                first_name = %edited.first_name(),
                last_name = %edited.last_name(),
                "Edit rejected, name already in use"
            );
            return Ok(EditOutcome::NameTaken);
        }

        info!(
            book = %self.name,
            first_name = %first_name,
            last_name = %last_name,
            fields = ?fields,
            "Contact updated"
        );
        self.contacts[index] = edited;
        Ok(EditOutcome::Updated)
    }

    /// Remove the named contact.
    pub fn delete_contact(&mut self, first_name: &str, last_name: &str) -> DeleteOutcome {
        match self.position(first_name, last_name) {
            Some(index) => {
                info!(book = %self.name, first_name = %first_name, last_name = %last_name, "Contact deleted");
                DeleteOutcome::Deleted(self.contacts.remove(index))
            }
            None => {
                debug!(book = %self.name, first_name = %first_name, last_name = %last_name, "Delete target not found");
                DeleteOutcome::NotFound
            }
        }
    }

    /// Contacts rendered with [`Contact::display`], numbered from 1.
    pub fn list_contacts(&self) -> Listing {
        Listing::numbered(self.contacts.iter().map(Contact::display), EMPTY_BOOK_MESSAGE)
    }

    pub fn count_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// Number of contacts per city, in order of first occurrence.
    pub fn count_by_city(&self) -> GroupCounts {
        self.count_by(Field::City)
    }

    /// Number of contacts per state, in order of first occurrence.
    pub fn count_by_state(&self) -> GroupCounts {
        self.count_by(Field::State)
    }

    /// Contacts living in `city`, in book order.
    pub fn contacts_in_city<'a>(&'a self, city: &'a str) -> impl Iterator<Item = &'a Contact> {
        self.contacts.iter().filter(move |c| c.city() == city)
    }

    /// Contacts living in `state`, in book order.
    pub fn contacts_in_state<'a>(
        &'a self,
        state: &'a str,
    ) -> impl Iterator<Item = &'a Contact> {
        self.contacts.iter().filter(move |c| c.state() == state)
    }

    pub fn sort_by_city(&mut self) {
        self.sort_by(Field::City);
    }

    pub fn sort_by_state(&mut self) {
        self.sort_by(Field::State);
    }

    pub fn sort_by_zip(&mut self) {
        self.sort_by(Field::Zip);
    }

    /// Sort by first name, then last name.
    pub fn sort_by_name(&mut self) {
        self.contacts.sort_by(|a, b| {
            a.first_name()
                .cmp(b.first_name())
                .then_with(|| a.last_name().cmp(b.last_name()))
        });
        debug!(book = %self.name, "Contacts sorted by name");
    }

    /// Stable ascending sort on the string value of `field`.
    pub fn sort_by(&mut self, field: Field) {
        self.contacts.sort_by(|a, b| a.get(field).cmp(b.get(field)));
        debug!(book = %self.name, field = %field, "Contacts sorted");
    }

    /// Number of contacts per distinct value of `field`.
    pub fn count_by(&self, field: Field) -> GroupCounts {
        let counts = GroupCounts::tally(self.contacts.iter().map(|c| c.get(field)));
        debug!(book = %self.name, field = %field, groups = counts.len(), "Contacts grouped");
        counts
    }

    fn position(&self, first_name: &str, last_name: &str) -> Option<usize> {
        self.contacts
            .iter()
            .position(|c| c.matches_name(first_name, last_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(first: &str, last: &str, city: &str, zip: &str) -> Contact {
        Contact::new(
            first,
            last,
            "12 Main Road",
            city,
            "Karnataka",
            zip,
            "123-456-7890",
            "someone@example.com",
        )
        .unwrap()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new("Friends");
        assert_eq!(book.name(), "Friends");
        assert_eq!(book.count_contacts(), 0);
        assert!(book.is_empty());
        assert_eq!(book.list_contacts().to_string(), EMPTY_BOOK_MESSAGE);
    }

    #[test]
    fn test_add_rejects_duplicate_name() {
        let mut book = AddressBook::new("Friends");
        assert_eq!(
            book.add_contact(contact("Asha", "Rao", "Mysore", "570001")),
            AddOutcome::Added
        );
        // Same name, different details
        assert_eq!(
            book.add_contact(contact("Asha", "Rao", "Bangalore", "560001")),
            AddOutcome::Duplicate
        );
        assert_eq!(book.count_contacts(), 1);
        assert_eq!(book.contacts()[0].city(), "Mysore");
    }

    #[test]
    fn test_find_is_exact() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));

        assert!(book.find_contact("Asha", "Rao").is_some());
        assert!(book.find_contact("ASHA", "Rao").is_none());
        assert!(book.find_contact("Asha", "Raos").is_none());
    }

    #[test]
    fn test_edit_rename_onto_existing_name_is_rejected() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));
        let _ = book.add_contact(contact("Ravi", "Rao", "Mysore", "570002"));

        let outcome = book
            .edit_contact("Ravi", "Rao", ContactUpdate::new().first_name("Asha").city("Udupi"))
            .unwrap();

        assert_eq!(outcome, EditOutcome::NameTaken);
        assert_eq!(book.find_contact("Ravi", "Rao").unwrap().city(), "Mysore");
    }

    #[test]
    fn test_edit_invalid_value_leaves_book_unchanged() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));
        let before = book.clone();

        let result = book.edit_contact("Asha", "Rao", ContactUpdate::new().zip("57"));
        assert!(result.is_err());
        assert_eq!(book, before);
    }

    #[test]
    fn test_edit_can_rename() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));

        let outcome = book
            .edit_contact("Asha", "Rao", ContactUpdate::new().last_name("Iyer"))
            .unwrap();
        assert!(outcome.is_updated());
        assert!(book.find_contact("Asha", "Rao").is_none());
        assert!(book.find_contact("Asha", "Iyer").is_some());
    }

    #[test]
    fn test_sort_by_city_is_stable() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Zara", "Khan", "Mysore", "570001"));
        let _ = book.add_contact(contact("Asha", "Rao", "Bangalore", "560001"));
        let _ = book.add_contact(contact("Bala", "Iyer", "Mysore", "570002"));

        book.sort_by_city();
        let names: Vec<_> = book.contacts().iter().map(Contact::full_name).collect();
        assert_eq!(names, vec!["Asha Rao", "Zara Khan", "Bala Iyer"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Zara", "Khan", "Mysore", "570001"));
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));
        let _ = book.add_contact(contact("Asha", "Iyer", "Mysore", "570001"));

        book.sort_by_name();
        let names: Vec<_> = book.contacts().iter().map(Contact::full_name).collect();
        assert_eq!(names, vec!["Asha Iyer", "Asha Rao", "Zara Khan"]);
    }

    #[test]
    fn test_contacts_in_city() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Zara", "Khan", "Mysore", "570001"));
        let _ = book.add_contact(contact("Asha", "Rao", "Bangalore", "560001"));
        let _ = book.add_contact(contact("Bala", "Iyer", "Mysore", "570002"));

        let found: Vec<_> = book.contacts_in_city("Mysore").map(Contact::first_name).collect();
        assert_eq!(found, vec!["Zara", "Bala"]);
        assert_eq!(book.contacts_in_state("Karnataka").count(), 3);
        assert_eq!(book.contacts_in_state("Kerala").count(), 0);
    }

    #[test]
    fn test_serialize_book() {
        let mut book = AddressBook::new("Friends");
        let _ = book.add_contact(contact("Asha", "Rao", "Mysore", "570001"));

        let json = serde_json::to_value(&book).unwrap();
        assert_eq!(json["name"], "Friends");
        assert_eq!(json["contacts"][0]["first_name"], "Asha");
    }
}
