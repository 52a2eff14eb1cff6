//! Field validators used when converting request DTOs into server parameters.
//!
//! Every check records its failure into a `ValidationErrors` instead of returning early,
//! so one response reports all rejected fields.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::server::error::validation::{ValidationErrors, REQUIRED};

/// Takes a required string field, recording `REQUIRED` when it is absent or blank.
pub fn required(
    errors: &mut ValidationErrors,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Some(value),
        _ => {
            errors.add(field, REQUIRED);
            None
        }
    }
}

/// Records an error when `value` is longer than `max` characters.
pub fn max_length(errors: &mut ValidationErrors, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.add(
            field,
            format!("Ensure this field has no more than {} characters.", max),
        );
    }
}

/// A single `@` separating a non-empty local part from a domain containing no whitespace.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    !local.is_empty()
        && !domain.is_empty()
        && !value.chars().any(char::is_whitespace)
}

/// Letters, digits and `_ . @ + -`, matching `^[\w.@+-]+$`.
pub fn is_valid_username(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '@' | '+' | '-'))
}

/// ASCII letters, digits, `-` and `_`.
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}

/// Returns the upper-cased color when `value` is `#` followed by six hex digits.
pub fn normalize_color(value: &str) -> Option<String> {
    let hex = value.strip_prefix('#')?;

    if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
        Some(value.to_ascii_uppercase())
    } else {
        None
    }
}

/// Checks an inline image of the form `data:image/<subtype>;base64,<payload>`.
///
/// The payload must be non-empty standard base64.
pub fn is_valid_image(value: &str) -> bool {
    let Some(rest) = value.strip_prefix("data:image/") else {
        return false;
    };
    let Some((subtype, payload)) = rest.split_once(";base64,") else {
        return false;
    };

    let subtype_ok = !subtype.is_empty()
        && subtype
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !subtype_ok {
        return false;
    }

    matches!(STANDARD.decode(payload.trim()), Ok(bytes) if !bytes.is_empty())
}
