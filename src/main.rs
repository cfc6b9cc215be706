//! Address Book - Main entry point
//!
//! Runs a scripted session against an in-memory address book manager and
//! prints the outcome of each operation to stdout. Logs go to stderr.

use address_book::{
    AddOutcome, AddressBook, AddressBookManager, Config, Contact, ContactRecord, ContactUpdate,
    DeleteOutcome, EditOutcome, OutputFormat, ValidationResult,
};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Contacts added to the default book at startup. One has an invalid state
/// and one repeats an earlier name.
fn sample_records() -> Vec<ContactRecord> {
    let rows = [
        ("Rahul", "Sharan", "435 Street", "Indore", "Madhya Pradesh", "235456", "123-456-7890", "rahulsh@example.com"),
        ("Priya", "Verma", "12 Lake Road", "Bhopal", "Madhya Pradesh", "462001", "987-654-3210", "priya.verma@example.com"),
        ("Arjun", "Mehta", "88 Hill View", "Pune", "Maharashtra", "411001", "555-123-4567", "arjun@example.in"),
        ("Kavya", "Nair", "7 Beach Lane", "Kochi", "Kerala", "682001", "444-222-1111", "kavya_nair@example.org"),
        ("Sanjay", "Gupta", "21 Ring Road", "Indore", "Madhya Pradesh", "452001", "333-777-9999", "sanjay@example.com"),
        ("Meera", "Iyer", "3 Temple Street", "Chennai", "TN", "600001", "222-333-4444", "meera@example.com"),
        ("Rahul", "Sharan", "9 Other Street", "Mumbai", "Maharashtra", "400001", "111-222-3333", "rahul2@example.com"),
    ];

    rows.iter()
        .map(|&(first, last, address, city, state, zip, phone, email)| ContactRecord {
            first_name: first.to_string(),
            last_name: last.to_string(),
            address: address.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
        .collect()
}

fn add_samples(book: &mut AddressBook) {
    for record in sample_records() {
        let name = format!("{} {}", record.first_name, record.last_name);
        match Contact::try_from(record) {
            Ok(contact) => match book.add_contact(contact) {
                AddOutcome::Added => println!("Added {} to {}.", name, book.name()),
                AddOutcome::Duplicate => {
                    println!("Duplicate entry! {} already exists in {}.", name, book.name())
                }
            },
            Err(e) => println!("Could not create {}: {}", name, e),
        }
    }
}

fn describe_edit(name: &str, result: &ValidationResult<EditOutcome>) -> String {
    match result {
        Ok(EditOutcome::Updated) => format!("Updated {}.", name),
        Ok(EditOutcome::NotFound) => format!("{} not found.", name),
        Ok(EditOutcome::NameTaken) => {
            format!("Cannot update {}, another contact already uses that name.", name)
        }
        Err(e) => format!("Update of {} rejected: {}", name, e),
    }
}

fn print_section(title: &str) {
    println!();
    println!("== {} ==", title);
}

fn run(config: &Config) -> Result<()> {
    let mut manager = AddressBookManager::new();
    manager.create_address_book(config.default_book.as_str());
    manager.create_address_book("Work");

    print_section("Address books");
    println!("{}", manager.list_address_books());

    let book = manager
        .get_address_book_mut(&config.default_book)
        .context("default address book missing after creation")?;

    print_section("Adding contacts");
    add_samples(book);

    print_section("Contacts");
    println!("{}", book.list_contacts());
    println!("Total contacts: {}", book.count_contacts());

    print_section("Lookup");
    match book.find_contact("Priya", "Verma") {
        Some(contact) => println!("Found: {}", contact),
        None => println!("Priya Verma not found."),
    }

    print_section("Editing");
    let update = ContactUpdate::new().city("Gwalior").zip("474001");
    let result = book.edit_contact("Rahul", "Sharan", update);
    println!("{}", describe_edit("Rahul Sharan", &result));

    let result = book.edit_contact("Rahul", "Sharan", ContactUpdate::new().phone("12345"));
    println!("{}", describe_edit("Rahul Sharan", &result));

    let result = book.edit_contact("Nobody", "Here", ContactUpdate::new().city("Nowhere"));
    println!("{}", describe_edit("Nobody Here", &result));

    print_section("Deleting");
    for _ in 0..2 {
        match book.delete_contact("Kavya", "Nair") {
            DeleteOutcome::Deleted(contact) => println!("Deleted {}.", contact.full_name()),
            DeleteOutcome::NotFound => println!("Kavya Nair not found."),
        }
    }

    print_section("Count by city");
    println!("{}", book.count_by_city());

    print_section("Count by state");
    println!("{}", book.count_by_state());

    print_section("Sorted by city");
    book.sort_by_city();
    println!("{}", book.list_contacts());

    print_section("Sorted by state");
    book.sort_by_state();
    println!("{}", book.list_contacts());

    print_section("Sorted by zip");
    book.sort_by_zip();
    println!("{}", book.list_contacts());

    print_section("Contacts in Madhya Pradesh");
    for (book_name, contact) in manager.find_in_state("Madhya Pradesh") {
        println!("[{}] {}", book_name, contact.full_name());
    }

    let book = manager
        .get_address_book(&config.default_book)
        .context("default address book missing")?;

    print_section(&format!("Final contents of {}", book.name()));
    match config.output_format {
        OutputFormat::Text => println!("{}", book.list_contacts()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(book)?),
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr so stdout carries only the session report
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(
        default_book = %config.default_book,
        output = %config.output_format,
        "Starting address book session"
    );

    if let Err(e) = run(&config) {
        error!("Session failed: {:#}", e);
        return Err(e);
    }

    info!("Address book session complete");
    Ok(())
}
