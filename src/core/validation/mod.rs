//! Validation primitives
//!
//! Pure, stateless checks shared by every factory. Nothing in here keeps
//! state between calls; configurable bounds are passed in explicitly.

pub mod validators;

pub use validators::{
    is_blank, is_valid_contact_digit, is_valid_email, is_valid_iso_date, is_valid_postal_code,
};
