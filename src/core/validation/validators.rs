//! Reusable field validators
//!
//! Plain predicates (`is_*`) answer yes or no. Their `ensure_*` counterparts
//! turn a failed check into a [`ValidationError`] naming the entity and
//! field, so factories can short-circuit with `?`.

use crate::config::Bounds;
use crate::core::error::{ValidationError, ValidationResult};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

/// Default postal code bounds: four digits
pub const POSTAL_CODE_BOUNDS: Bounds = Bounds::new(1000, 9999);

/// Default bounds for the single-digit contact check
pub const CONTACT_DIGIT_BOUNDS: Bounds = Bounds::new(1, 10);

/// ISO-8601 calendar date
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

// === Predicates ===

/// True when the string is empty or only whitespace
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn is_valid_email(email: &str) -> bool {
    !is_blank(email) && email_regex().is_match(email)
}

/// Four-digit postal code in [1000, 9999]
pub fn is_valid_postal_code(postal_code: i64) -> bool {
    POSTAL_CODE_BOUNDS.contains(postal_code)
}

/// Parse `value` as a calendar date in `format`
pub fn parse_date(value: &str, format: &str) -> Option<NaiveDate> {
    if is_blank(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, format).ok()
}

/// True when `value` is a real ISO-8601 calendar date (`2025-05-11`)
pub fn is_valid_iso_date(value: &str) -> bool {
    parse_date(value, ISO_DATE_FORMAT).is_some()
}

/// True when the phone number parses to an integer within `bounds`
///
/// This is the narrow "single digit" contact check; real phone numbers
/// do not pass it.
pub fn is_valid_contact_digit_within(phone_number: &str, bounds: Bounds) -> bool {
    phone_number
        .trim()
        .parse::<i64>()
        .map(|digit| bounds.contains(digit))
        .unwrap_or(false)
}

pub fn is_valid_contact_digit(phone_number: &str) -> bool {
    is_valid_contact_digit_within(phone_number, CONTACT_DIGIT_BOUNDS)
}

// === Gates ===

/// Validator: string is required (not blank)
pub fn ensure_present(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> ValidationResult<()> {
    if is_blank(value) {
        Err(ValidationError::missing(entity, field))
    } else {
        Ok(())
    }
}

/// Validator: reference is required (not absent)
pub fn ensure_some<T>(
    entity: &'static str,
    field: &'static str,
    value: Option<T>,
) -> ValidationResult<T> {
    value.ok_or_else(|| ValidationError::missing(entity, field))
}

/// Validator: string is a well-formed email address
pub fn ensure_email(
    entity: &'static str,
    field: &'static str,
    value: &str,
) -> ValidationResult<()> {
    ensure_present(entity, field, value)?;
    if email_regex().is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(
            entity,
            field,
            format!("'{}' is not a valid email address", value),
        ))
    }
}

/// Validator: string parses as a calendar date in `format`
pub fn ensure_date(
    entity: &'static str,
    field: &'static str,
    value: &str,
    format: &str,
) -> ValidationResult<NaiveDate> {
    ensure_present(entity, field, value)?;
    parse_date(value, format).ok_or_else(|| {
        ValidationError::invalid_format(
            entity,
            field,
            format!("'{}' is not a date in format {}", value, format),
        )
    })
}

/// Validator: integer lies within inclusive bounds
pub fn ensure_within(
    entity: &'static str,
    field: &'static str,
    value: i64,
    bounds: Bounds,
) -> ValidationResult<i64> {
    if bounds.contains(value) {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            entity,
            field,
            format!("{} is outside [{}, {}]", value, bounds.min, bounds.max),
        ))
    }
}

/// Validator: integer fits a `u32` and is at least `min`
pub fn ensure_u32(
    entity: &'static str,
    field: &'static str,
    value: i64,
    min: u32,
) -> ValidationResult<u32> {
    let value = ensure_within(entity, field, value, Bounds::new(min.into(), u32::MAX.into()))?;
    u32::try_from(value).map_err(|_| {
        ValidationError::out_of_range(entity, field, format!("{} does not fit in u32", value))
    })
}

/// Validator: numeric identifier must be non-zero
pub fn ensure_id(entity: &'static str, field: &'static str, value: u32) -> ValidationResult<u32> {
    ensure_u32(entity, field, value.into(), 1)
}

/// Validator: amount must be strictly positive
///
/// NaN and infinities are rejected as well.
pub fn ensure_positive(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> ValidationResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            entity,
            field,
            format!("{} must be greater than zero", value),
        ))
    }
}

/// Validator: amount must be zero or more
pub fn ensure_non_negative(
    entity: &'static str,
    field: &'static str,
    value: f64,
) -> ValidationResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::out_of_range(
            entity,
            field,
            format!("{} must not be negative", value),
        ))
    }
}
