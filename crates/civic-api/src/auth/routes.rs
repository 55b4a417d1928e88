use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    routing::post,
};
use civic_mock::{
    directory,
    envelope::{AuthResponse, UserDataResponse},
    profile,
};

use super::{
    models::{LoginRequest, RegisterRequest},
    service, validation,
};
use crate::{ApiState, error::ApiError, metrics};

pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
        // Older form endpoints still used by the landing page
        .route("/auth", post(legacy_login))
        .route("/register", post(legacy_register))
}

async fn login(
    State(state): State<ApiState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(payload) = payload?;
    let (email, password) = service::credentials(&payload).ok_or_else(|| {
        ApiError::Validation("Email and password are required".to_string())
    })?;

    let result = service::authenticate(&state.credentials, email, password);
    metrics::record_auth_event("login", result.is_ok());
    let user = result?;

    tracing::info!(user_id = user.id, "User logged in");
    let user = profile::from_directory(user, state.now(), &mut state.rng());

    Ok(Json(AuthResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
    }))
}

async fn register(
    State(state): State<ApiState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let Json(payload) = payload?;
    let registration = service::require_registration(&payload)?;
    service::validate_registration(&registration)?;

    if directory::email_taken(registration.email) {
        metrics::record_auth_event("register", false);
        return Err(ApiError::Conflict(
            "An account with this email already exists".to_string(),
        ));
    }

    let user = profile::new_user(
        registration.name,
        registration.email,
        registration.phone,
        registration.aadhaar_number,
        state.now(),
        &mut state.rng(),
    );
    metrics::record_auth_event("register", true);
    tracing::info!(user_id = %user.id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            success: true,
            message: "Registration successful".to_string(),
            user,
        }),
    ))
}

/// Login for the older form: every failure, including missing fields, is a 401.
async fn legacy_login(
    State(state): State<ApiState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let payload = payload.map(|Json(p)| p).unwrap_or_default();
    let (email, password) = service::credentials(&payload)
        .ok_or_else(|| ApiError::Unauthorized("Invalid email or password".to_string()))?;

    let result = service::authenticate(&state.credentials, email, password);
    metrics::record_auth_event("legacy_login", result.is_ok());
    let user = result?;

    Ok(Json(UserDataResponse {
        success: true,
        message: "Authentication successful".to_string(),
        user_data: profile::from_directory(user, state.now(), &mut state.rng()),
    }))
}

/// Registration for the older form, with the Aadhaar format check.
async fn legacy_register(
    State(state): State<ApiState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<UserDataResponse>, ApiError> {
    let Json(payload) = payload?;
    let registration = service::require_registration(&payload)?;
    validation::validate_aadhaar(registration.aadhaar_number)?;
    service::validate_registration(&registration)?;

    let user = profile::new_user(
        registration.name,
        registration.email,
        registration.phone,
        registration.aadhaar_number,
        state.now(),
        &mut state.rng(),
    );
    metrics::record_auth_event("legacy_register", true);

    Ok(Json(UserDataResponse {
        success: true,
        message: "Registration successful".to_string(),
        user_data: user,
    }))
}
