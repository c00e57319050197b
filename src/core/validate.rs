//! Field-level validation helpers.
//!
//! Every check returns `Error::Validation` naming the offending field so the
//! caller can surface a field-specific correction message.

use crate::errors::{Error, Result};

/// Rounds a monetary amount to 2 decimal places.
#[must_use]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Validates a required text field against a length range, returning the
/// trimmed value. Lengths are counted in characters, not bytes.
pub fn required_text(field: &str, value: &str, min: usize, max: usize) -> Result<String> {
    let trimmed = value.trim();
    let length = trimmed.chars().count();
    if length < min || length > max {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("must be between {min} and {max} characters"),
        });
    }
    Ok(trimmed.to_string())
}

/// Validates an optional text field against a maximum length in characters,
/// returning the trimmed value. Empty or whitespace-only input becomes `None`.
pub fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>> {
    let Some(value) = value else {
        return Ok(None);
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.chars().count() > max {
        return Err(Error::Validation {
            field: field.to_string(),
            message: format!("must be at most {max} characters"),
        });
    }
    Ok(Some(trimmed.to_string()))
}

/// Validates a non-negative, finite monetary or quantity amount.
pub fn non_negative_amount(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation {
            field: field.to_string(),
            message: "must be a non-negative number".to_string(),
        });
    }
    Ok(value)
}

/// Validates email syntax: exactly one `@`, non-empty local part, a domain
/// containing a dot, and no whitespace. Returns the trimmed value; matching
/// against stored values is exact (case-sensitive).
pub fn email_syntax(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let invalid = || Error::Validation {
        field: "email".to_string(),
        message: "must be a valid email address".to_string(),
    };

    let (local, domain) = trimmed.split_once('@').ok_or_else(invalid)?;
    if local.is_empty()
        || domain.is_empty()
        || domain.contains('@')
        || !domain.contains('.')
        || domain.starts_with('.')
        || domain.ends_with('.')
        || trimmed.chars().any(char::is_whitespace)
    {
        return Err(invalid());
    }
    Ok(trimmed.to_string())
}

/// Validates phone syntax: 10-13 characters drawn from digits, hyphens, and
/// plus signs, with at least one digit. Returns the trimmed value.
pub fn phone_syntax(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || c == '-' || c == '+');
    let has_digit = trimmed.chars().any(|c| c.is_ascii_digit());

    if trimmed.len() < 10 || trimmed.len() > 13 || !valid_chars || !has_digit {
        return Err(Error::Validation {
            field: "phone".to_string(),
            message: "must be 10-13 digits, hyphens, or plus signs".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(19.980_000_000_000_004), 19.98);
        assert_eq!(round2(0.1 + 0.2), 0.3);
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_required_text_bounds() {
        assert!(required_text("name", "ok", 2, 100).is_ok());
        assert!(required_text("name", "  padded  ", 2, 100).is_ok());
        assert!(required_text("name", "x", 2, 100).is_err());
        assert!(required_text("name", "", 2, 100).is_err());
        assert!(required_text("name", &"a".repeat(101), 2, 100).is_err());
    }

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("name", " Anna ", 2, 100).unwrap(), "Anna");
    }

    #[test]
    fn test_required_text_counts_characters_not_bytes() {
        // One Cyrillic character is two bytes but still below the minimum
        assert!(required_text("firstName", "Я", 2, 100).is_err());
        // 100 accented characters (200 bytes) sit exactly at the maximum
        assert!(required_text("firstName", &"é".repeat(100), 2, 100).is_ok());
        assert!(required_text("firstName", &"é".repeat(101), 2, 100).is_err());
    }

    #[test]
    fn test_optional_text_counts_characters_not_bytes() {
        assert!(optional_text("description", Some(&"é".repeat(200)), 200).is_ok());
        assert!(optional_text("description", Some(&"é".repeat(201)), 200).is_err());
    }

    #[test]
    fn test_optional_text() {
        assert_eq!(optional_text("description", None, 200).unwrap(), None);
        assert_eq!(optional_text("description", Some("   "), 200).unwrap(), None);
        assert_eq!(
            optional_text("description", Some(" note "), 200).unwrap(),
            Some("note".to_string())
        );
        assert!(optional_text("description", Some(&"a".repeat(201)), 200).is_err());
    }

    #[test]
    fn test_non_negative_amount() {
        assert_eq!(non_negative_amount("price", 9.99).unwrap(), 9.99);
        assert_eq!(non_negative_amount("price", 0.0).unwrap(), 0.0);
        assert!(non_negative_amount("price", -0.01).is_err());
        assert!(non_negative_amount("price", f64::NAN).is_err());
        assert!(non_negative_amount("price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_email_syntax() {
        assert!(email_syntax("a@example.com").is_ok());
        assert_eq!(email_syntax(" a@example.com ").unwrap(), "a@example.com");
        assert!(email_syntax("no-at-sign").is_err());
        assert!(email_syntax("@example.com").is_err());
        assert!(email_syntax("a@").is_err());
        assert!(email_syntax("a@nodot").is_err());
        assert!(email_syntax("a@.com").is_err());
        assert!(email_syntax("a@example.com.").is_err());
        assert!(email_syntax("a b@example.com").is_err());
        assert!(email_syntax("a@b@example.com").is_err());
    }

    #[test]
    fn test_phone_syntax() {
        assert!(phone_syntax("0123456789").is_ok());
        assert!(phone_syntax("+1-555-01234").is_ok());
        assert!(phone_syntax("123456789").is_err()); // too short
        assert!(phone_syntax("12345678901234").is_err()); // too long
        assert!(phone_syntax("01234 56789").is_err()); // space
        assert!(phone_syntax("abcdefghij").is_err()); // letters
        assert!(phone_syntax("----------").is_err()); // no digits
    }
}
