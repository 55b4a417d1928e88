use civic_mock::directory::{self, DirectoryUser};

use super::{
    models::{LoginRequest, RegisterRequest, Registration},
    validation,
};
use crate::error::ApiError;

/// Passwords the demo accepts for every directory user when enabled.
///
/// These bypass the stored password entirely. They exist only so the demo can
/// be clicked through, and are off unless `ALLOW_DEMO_PASSWORDS=true`.
pub const DEMO_FALLBACK_PASSWORDS: [&str; 2] = [
    "password123",
    "$2a$10$XQxBGJvKxRGx1oN8rDqWAeYQzVgNJ4pMTqJ5.7zR9HmVB3kWxQZXe",
];

/// Which passwords are accepted at login
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CredentialPolicy {
    pub allow_demo_passwords: bool,
}

impl CredentialPolicy {
    /// Whether `candidate` unlocks `user`.
    pub fn accepts(&self, user: &DirectoryUser, candidate: &str) -> bool {
        if candidate == user.password {
            return true;
        }

        self.allow_demo_passwords && DEMO_FALLBACK_PASSWORDS.contains(&candidate)
    }
}

const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Pull email and password out of a login request, trimmed and non-empty.
pub fn credentials(payload: &LoginRequest) -> Option<(&str, &str)> {
    let email = payload.email.as_deref().map(str::trim).filter(|e| !e.is_empty())?;
    let password = payload.password.as_deref().filter(|p| !p.is_empty())?;
    Some((email, password))
}

/// Check credentials against the directory.
///
/// Unknown email and wrong password give the same error.
pub fn authenticate(
    policy: &CredentialPolicy,
    email: &str,
    password: &str,
) -> Result<&'static DirectoryUser, ApiError> {
    let user = directory::find_by_email(email)
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    if !policy.accepts(user, password) {
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    Ok(user)
}

/// Presence check for every registration field.
///
/// The error lists the missing fields by their JSON names.
pub fn require_registration(payload: &RegisterRequest) -> Result<Registration<'_>, ApiError> {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    let fields = [
        ("name", present(&payload.name)),
        ("email", present(&payload.email)),
        ("phone", present(&payload.phone)),
        ("password", present(&payload.password)),
        ("aadhaarNumber", present(&payload.aadhaar_number)),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();
    if !missing.is_empty() {
        return Err(ApiError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )));
    }

    match fields {
        [
            (_, Some(name)),
            (_, Some(email)),
            (_, Some(phone)),
            (_, Some(password)),
            (_, Some(aadhaar_number)),
        ] => Ok(Registration {
            name,
            email,
            phone,
            password,
            aadhaar_number,
        }),
        _ => Err(ApiError::Validation("Missing required fields".to_string())),
    }
}

/// Format checks shared by both registration routes.
pub fn validate_registration(registration: &Registration<'_>) -> Result<(), ApiError> {
    validation::validate_name(registration.name)?;
    validation::validate_email(registration.email)?;
    validation::validate_phone(registration.phone)?;
    validation::validate_password(registration.password)?;
    Ok(())
}
