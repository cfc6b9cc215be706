//! Data models for address book entities.
//!
//! This module contains the contact record, its partial update, and the
//! report types produced by listing and grouping operations.

pub mod contact;
pub mod report;

pub use contact::{Contact, ContactRecord, ContactUpdate};
pub use report::{GroupCounts, Listing};
