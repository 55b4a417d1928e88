use std::sync::LazyLock;

use regex::Regex;
use validator::ValidateEmail;

use crate::error::ApiError;

static AADHAAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{12}$").expect("aadhaar pattern is valid"));
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\+91[ -]?)?[6-9][0-9]{9}$").expect("phone pattern is valid"));

const PASSWORD_CHARS: std::ops::RangeInclusive<usize> = 8..=128;
const NAME_CHARS: std::ops::RangeInclusive<usize> = 1..=100;

fn invalid(message: &str) -> ApiError {
    ApiError::Validation(message.to_string())
}

/// Syntactic email check; deliverability is not checked.
pub fn validate_email(email: &str) -> Result<(), ApiError> {
    match email {
        "" => Err(invalid("Email cannot be empty")),
        _ if !email.validate_email() => Err(invalid("Invalid email format")),
        _ => Ok(()),
    }
}

/// 8 to 128 characters with at least one letter and one digit.
pub fn validate_password(password: &str) -> Result<(), ApiError> {
    let length = password.chars().count();
    if !PASSWORD_CHARS.contains(&length) {
        return Err(ApiError::Validation(format!(
            "Password must be between {} and {} characters long",
            PASSWORD_CHARS.start(),
            PASSWORD_CHARS.end()
        )));
    }

    let letter = password.chars().any(char::is_alphabetic);
    let digit = password.chars().any(|c| c.is_ascii_digit());
    if letter && digit {
        Ok(())
    } else {
        Err(invalid("Password must contain at least one letter and one number"))
    }
}

/// Letters with spaces, periods, apostrophes and hyphens; no markup.
pub fn validate_name(name: &str) -> Result<(), ApiError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(invalid("Name cannot be empty"));
    }
    if !NAME_CHARS.contains(&name.chars().count()) {
        return Err(invalid("Name must be at most 100 characters long"));
    }

    let allowed = |c: char| c.is_alphabetic() || matches!(c, ' ' | '.' | '\'' | '-');
    if !name.chars().all(allowed) {
        return Err(invalid(
            "Name can only contain letters, spaces, periods, apostrophes, and hyphens",
        ));
    }

    Ok(())
}

/// Validate an Indian mobile number, optionally prefixed with `+91`
pub fn validate_phone(phone: &str) -> Result<(), ApiError> {
    if PHONE.is_match(phone.trim()) {
        Ok(())
    } else {
        Err(invalid("Phone number must be a valid 10-digit mobile number"))
    }
}

/// Validate an Aadhaar number: exactly twelve digits
pub fn validate_aadhaar(aadhaar_number: &str) -> Result<(), ApiError> {
    if AADHAAR.is_match(aadhaar_number) {
        Ok(())
    } else {
        Err(invalid("Aadhaar number must be exactly 12 digits"))
    }
}
