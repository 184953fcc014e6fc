//! Field validation for the listings entities
//!
//! Every mutator funnels its raw input through one of these functions. The
//! helpers return the validated value, so an entity only ever stores data
//! that has passed its checks.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{FieldError, FieldResult};

/// Maximum price accepted for a listing, in whole dollars
pub const MAX_PRICE: i64 = 9_999_999_999;

/// Maximum length of an item description in characters
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Maximum length of an image reference in characters
pub const MAX_IMAGES_LEN: usize = 64;

/// Maximum length of an email address in characters
pub const MAX_EMAIL_LEN: usize = 128;

/// Maximum length of a location name in characters
pub const MAX_LOCATION_LEN: usize = 64;

/// Strip unsafe content from free-text input.
///
/// Removes `<...>` markup sequences and ASCII control characters other than
/// newline and tab, then trims surrounding whitespace.
pub fn sanitize(value: &str) -> String {
    static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let regex =
        TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("Failed to compile tag regex"));

    let stripped = regex.replace_all(value, "");
    stripped
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate free-text input against a field maximum.
///
/// Returns the sanitized value. Fails when nothing survives sanitization or
/// when the result exceeds `max_len` characters.
pub fn validate_text(label: &str, value: &str, max_len: usize) -> FieldResult<String> {
    let clean = sanitize(value);

    if clean.is_empty() {
        return Err(FieldError::InvalidArgument(format!(
            "{} is empty or insecure",
            label
        )));
    }

    if clean.chars().count() > max_len {
        return Err(FieldError::OutOfRange(format!("{} too long", label)));
    }

    Ok(clean)
}

/// Parse an id field, which must hold a positive integer.
pub fn parse_id(label: &str, value: &str) -> FieldResult<i64> {
    let id: i64 = value
        .trim()
        .parse()
        .map_err(|_| FieldError::UnexpectedValue(format!("{} is not a valid integer", label)))?;

    if id <= 0 {
        return Err(FieldError::OutOfRange(format!("{} is not positive", label)));
    }

    Ok(id)
}

/// Parse a price in whole dollars.
///
/// The price must be a positive integer no greater than [`MAX_PRICE`].
pub fn parse_price(value: &str) -> FieldResult<i64> {
    let price: i64 = value
        .trim()
        .parse()
        .map_err(|_| FieldError::InvalidArgument("price is not a valid amount".to_string()))?;

    if price <= 0 {
        return Err(FieldError::OutOfRange("Price is not positive".to_string()));
    }

    if price > MAX_PRICE {
        return Err(FieldError::OutOfRange(format!(
            "price exceeds the maximum of {}",
            MAX_PRICE
        )));
    }

    Ok(price)
}
