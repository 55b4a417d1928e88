use serde::Deserialize;

/// Credentials sent to `/api/auth/login` and `/api/auth`.
///
/// Fields are optional so that missing values produce a validation error
/// instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Registration form sent to `/api/auth/register` and `/api/register`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub aadhaar_number: Option<String>,
}

/// Registration form after the presence check
#[derive(Debug)]
pub struct Registration<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
    pub aadhaar_number: &'a str,
}
