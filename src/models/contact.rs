//! Contact model representing a single person in an address book.

use crate::domain::{
    EmailAddress, Field, Locality, PersonName, PhoneNumber, ValidationError, ValidationResult,
    ZipCode,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unvalidated contact fields, as received from a caller or a serialized form.
///
/// Converting into a [`Contact`] runs every field validator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ContactRecord {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,
    pub email: String,
}

/// A validated contact.
///
/// Every field satisfies its rule for as long as the value exists: the only
/// ways to obtain or change a `Contact` are [`Contact::new`],
/// `TryFrom<ContactRecord>`, deserialization, and [`Contact::update_details`],
/// all of which validate.
///
/// Two contacts are the same person when their `(first_name, last_name)`
/// pair is equal; see [`Contact::matches_name`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ContactRecord", into = "ContactRecord")]
pub struct Contact {
    first_name: PersonName,
    last_name: PersonName,
    address: Locality,
    city: Locality,
    state: Locality,
    zip: ZipCode,
    phone: PhoneNumber,
    email: EmailAddress,
}

impl Contact {
    /// Create a new contact, validating every field.
    ///
    /// Fields are checked in the order first name, last name, address, city,
    /// state, zip, phone, email; the first failure is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use address_book::Contact;
    ///
    /// let contact = Contact::new(
    ///     "Rahul", "Sharan", "435 Street", "Indore", "Madhya Pradesh",
    ///     "235456", "123-456-7890", "rahulsh@example.com",
    /// ).unwrap();
    /// assert_eq!(contact.full_name(), "Rahul Sharan");
    /// ```
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        zip: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> ValidationResult<Self> {
        Ok(Self {
            first_name: PersonName::new(Field::FirstName, first_name)?,
            last_name: PersonName::new(Field::LastName, last_name)?,
            address: Locality::new(Field::Address, address)?,
            city: Locality::new(Field::City, city)?,
            state: Locality::new(Field::State, state)?,
            zip: ZipCode::new(zip)?,
            phone: PhoneNumber::new(phone)?,
            email: EmailAddress::new(email)?,
        })
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    pub fn city(&self) -> &str {
        self.city.as_str()
    }

    pub fn state(&self) -> &str {
        self.state.as_str()
    }

    pub fn zip(&self) -> &str {
        self.zip.as_str()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Value of the given field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => self.first_name(),
            Field::LastName => self.last_name(),
            Field::Address => self.address(),
            Field::City => self.city(),
            Field::State => self.state(),
            Field::Zip => self.zip(),
            Field::Phone => self.phone(),
            Field::Email => self.email(),
        }
    }

    /// `"First Last"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Exact, case-sensitive match on both name fields.
    pub fn matches_name(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name() == first_name && self.last_name() == last_name
    }

    /// One-line rendering:
    /// `First Last, address, city, state, zip, phone, email`.
    pub fn display(&self) -> String {
        self.to_string()
    }

    /// Apply a partial update.
    ///
    /// Every field present in `update` is validated with the same rule used
    /// at construction, in construction order. If any field fails, the
    /// contact is left unchanged and the error is returned; otherwise all
    /// present fields are written and absent ones are left as they were.
    pub fn update_details(&mut self, update: ContactUpdate) -> ValidationResult<()> {
        let first_name = update
            .first_name
            .map(|v| PersonName::new(Field::FirstName, v))
            .transpose()?;
        let last_name = update
            .last_name
            .map(|v| PersonName::new(Field::LastName, v))
            .transpose()?;
        let address = update
            .address
            .map(|v| Locality::new(Field::Address, v))
            .transpose()?;
        let city = update
            .city
            .map(|v| Locality::new(Field::City, v))
            .transpose()?;
        let state = update
            .state
            .map(|v| Locality::new(Field::State, v))
            .transpose()?;
        let zip = update.zip.map(ZipCode::new).transpose()?;
        let phone = update.phone.map(PhoneNumber::new).transpose()?;
        let email = update.email.map(EmailAddress::new).transpose()?;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = address {
            self.address = v;
        }
        if let Some(v) = city {
            self.city = v;
        }
        if let Some(v) = state {
            self.state = v;
        }
        if let Some(v) = zip {
            self.zip = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = email {
            self.email = v;
        }

        Ok(())
    }
}

impl TryFrom<ContactRecord> for Contact {
    type Error = ValidationError;

    fn try_from(record: ContactRecord) -> Result<Self, Self::Error> {
        Contact::new(
            record.first_name,
            record.last_name,
            record.address,
            record.city,
            record.state,
            record.zip,
            record.phone,
            record.email,
        )
    }
}

impl From<Contact> for ContactRecord {
    fn from(contact: Contact) -> Self {
        ContactRecord {
            first_name: contact.first_name.into_inner(),
            last_name: contact.last_name.into_inner(),
            address: contact.address.into_inner(),
            city: contact.city.into_inner(),
            state: contact.state.into_inner(),
            zip: contact.zip.into_inner(),
            phone: contact.phone.into_inner(),
            email: contact.email.into_inner(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}, {}, {}, {}",
            self.first_name,
            self.last_name,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.phone,
            self.email
        )
    }
}

/// A partial update for a [`Contact`].
///
/// Only fields set to `Some` are touched. Built either by struct literal
/// with `..Default::default()` or with the chained setters:
///
/// ```
/// use address_book::ContactUpdate;
///
/// let update = ContactUpdate::new().city("Bhopal").zip("462001");
/// assert_eq!(update.fields().len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl ContactUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn zip(mut self, value: impl Into<String>) -> Self {
        self.zip = Some(value.into());
        self
    }

    pub fn phone(mut self, value: impl Into<String>) -> Self {
        self.phone = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    /// Fields present in this update, in validation order.
    pub fn fields(&self) -> Vec<Field> {
        let present = [
            self.first_name.is_some(),
            self.last_name.is_some(),
            self.address.is_some(),
            self.city.is_some(),
            self.state.is_some(),
            self.zip.is_some(),
            self.phone.is_some(),
            self.email.is_some(),
        ];
        Field::ALL
            .iter()
            .zip(present)
            .filter(|(_, set)| *set)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields().is_empty()
    }
}
