//! Test fixtures and sample data for integration tests.
//!
//! Every helper here builds contacts that pass validation, so tests can
//! focus on the collection behaviour.

#![allow(dead_code)]

use address_book::{AddressBook, Contact};

/// Create a valid contact with the given name and default details.
pub fn sample_contact(first_name: &str, last_name: &str) -> Contact {
    located_contact(first_name, last_name, "Indore", "Madhya Pradesh", "452001")
}

/// Create a valid contact with a specific city, state and zip.
pub fn located_contact(
    first_name: &str,
    last_name: &str,
    city: &str,
    state: &str,
    zip: &str,
) -> Contact {
    Contact::new(
        first_name,
        last_name,
        "435 Street",
        city,
        state,
        zip,
        "123-456-7890",
        format!("{}@example.com", first_name.to_lowercase()),
    )
    .unwrap_or_else(|e| panic!("fixture contact {} {} is invalid: {}", first_name, last_name, e))
}

/// Five distinct, valid contacts.
pub fn five_friends() -> Vec<Contact> {
    vec![
        located_contact("Rahul", "Sharan", "Indore", "Madhya Pradesh", "452001"),
        located_contact("Priya", "Verma", "Bhopal", "Madhya Pradesh", "462001"),
        located_contact("Arjun", "Mehta", "Pune", "Maharashtra", "411001"),
        located_contact("Kavya", "Nair", "Kochi", "Kerala", "682001"),
        located_contact("Sanjay", "Gupta", "Indore", "Madhya Pradesh", "452002"),
    ]
}

/// Build a book holding the given contacts, asserting each was added.
pub fn book_with(name: &str, contacts: Vec<Contact>) -> AddressBook {
    let mut book = AddressBook::new(name);
    for contact in contacts {
        assert!(book.add_contact(contact).is_added());
    }
    book
}

/// First and last names of the book's contacts, in book order.
pub fn names(book: &AddressBook) -> Vec<String> {
    book.contacts().iter().map(Contact::full_name).collect()
}
