//! Value objects: immutable leaf data with no identity of their own
//!
//! Builders here never fail. Checking that a postal code is in range or
//! that an email is well-formed belongs to the factory layer.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Address
// =============================================================================

/// A postal address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    street: String,
    city: String,
    postal_code: u32,
    country: String,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        postal_code: u32,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            postal_code,
            country: country.into(),
        }
    }

    pub fn builder() -> AddressBuilder {
        AddressBuilder::default()
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> u32 {
        self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.city, self.postal_code, self.country
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct AddressBuilder {
    street: Option<String>,
    city: Option<String>,
    postal_code: Option<u32>,
    country: Option<String>,
}

impl AddressBuilder {
    builder_string_setters! { street, city, country }
    builder_setters! { postal_code: u32 }

    /// Seed a builder with every field of `address`
    pub fn copy(address: &Address) -> Self {
        Self {
            street: Some(address.street.clone()),
            city: Some(address.city.clone()),
            postal_code: Some(address.postal_code),
            country: Some(address.country.clone()),
        }
    }

    pub fn build(self) -> Address {
        Address {
            street: self.street.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            postal_code: self.postal_code.unwrap_or_default(),
            country: self.country.unwrap_or_default(),
        }
    }
}

// =============================================================================
// ContactDetails
// =============================================================================

/// How to reach a person or site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    email: String,
    phone_number: String,
    address: Option<Address>,
}

impl ContactDetails {
    pub fn builder() -> ContactDetailsBuilder {
        ContactDetailsBuilder::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ContactDetailsBuilder {
    email: Option<String>,
    phone_number: Option<String>,
    address: Option<Address>,
}

impl ContactDetailsBuilder {
    builder_string_setters! { email, phone_number }
    builder_setters! { address: Address }

    pub fn copy(contact_details: &ContactDetails) -> Self {
        Self {
            email: Some(contact_details.email.clone()),
            phone_number: Some(contact_details.phone_number.clone()),
            address: contact_details.address.clone(),
        }
    }

    pub fn build(self) -> ContactDetails {
        ContactDetails {
            email: self.email.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            address: self.address,
        }
    }
}

// =============================================================================
// PersonInfo
// =============================================================================

/// Personal details of an employee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    first_name: String,
    last_name: String,
    date_of_birth: Option<NaiveDate>,
    gender: String,
}

impl PersonInfo {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        date_of_birth: Option<NaiveDate>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth,
            gender: gender.into(),
        }
    }

    pub fn builder() -> PersonInfoBuilder {
        PersonInfoBuilder::default()
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    pub fn gender(&self) -> &str {
        &self.gender
    }
}

#[derive(Debug, Clone, Default)]
pub struct PersonInfoBuilder {
    first_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    gender: Option<String>,
}

impl PersonInfoBuilder {
    builder_string_setters! { first_name, last_name, gender }
    builder_setters! { date_of_birth: NaiveDate }

    pub fn copy(person_info: &PersonInfo) -> Self {
        Self {
            first_name: Some(person_info.first_name.clone()),
            last_name: Some(person_info.last_name.clone()),
            date_of_birth: person_info.date_of_birth,
            gender: Some(person_info.gender.clone()),
        }
    }

    pub fn build(self) -> PersonInfo {
        PersonInfo {
            first_name: self.first_name.unwrap_or_default(),
            last_name: self.last_name.unwrap_or_default(),
            date_of_birth: self.date_of_birth,
            gender: self.gender.unwrap_or_default(),
        }
    }
}
