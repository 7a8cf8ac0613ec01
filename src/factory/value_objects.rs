use super::{Factory, traced_value};
use crate::core::error::{ValidationError, ValidationResult};
use crate::core::validation::validators::{
    ensure_email, ensure_present, ensure_within, is_valid_contact_digit_within,
};
use crate::entities::value_objects::{Address, ContactDetails, PersonInfo};
use chrono::NaiveDate;

impl Factory {
    /// Create an address; the postal code must lie within the configured bounds
    pub fn create_address(
        &self,
        street: &str,
        city: &str,
        postal_code: i64,
        country: &str,
    ) -> ValidationResult<Address> {
        const ENTITY: &str = "address";
        traced_value(ENTITY, || {
            ensure_present(ENTITY, "street", street)?;
            ensure_present(ENTITY, "city", city)?;
            ensure_present(ENTITY, "country", country)?;
            let postal_code =
                ensure_within(ENTITY, "postal_code", postal_code, self.config.postal_code)?;
            let postal_code = u32::try_from(postal_code).map_err(|_| {
                ValidationError::out_of_range(
                    ENTITY,
                    "postal_code",
                    format!("{} is not a valid postal code", postal_code),
                )
            })?;

            Ok(Address::new(street, city, postal_code, country))
        })
    }

    /// Create contact details; the email must be well-formed
    pub fn create_contact_details(
        &self,
        email: &str,
        phone_number: &str,
        address: Option<Address>,
    ) -> ValidationResult<ContactDetails> {
        const ENTITY: &str = "contact_details";
        traced_value(ENTITY, || {
            ensure_present(ENTITY, "email", email)?;
            ensure_present(ENTITY, "phone_number", phone_number)?;
            ensure_email(ENTITY, "email", email)?;

            let mut builder = ContactDetails::builder().email(email).phone_number(phone_number);
            if let Some(address) = address {
                builder = builder.address(address);
            }
            Ok(builder.build())
        })
    }

    /// Single-digit contact check against the configured bounds
    pub fn is_valid_contact_digit(&self, phone_number: &str) -> bool {
        is_valid_contact_digit_within(phone_number, self.config.contact_digit)
    }

    pub fn create_person_info(
        &self,
        first_name: &str,
        last_name: &str,
        date_of_birth: Option<NaiveDate>,
        gender: &str,
    ) -> ValidationResult<PersonInfo> {
        const ENTITY: &str = "person_info";
        traced_value(ENTITY, || {
            ensure_present(ENTITY, "first_name", first_name)?;
            ensure_present(ENTITY, "last_name", last_name)?;

            Ok(PersonInfo::new(first_name, last_name, date_of_birth, gender))
        })
    }
}
