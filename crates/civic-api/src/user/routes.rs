use axum::{
    Json, Router,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
    routing::get,
};
use civic_mock::{envelope::ProfileResponse, models::ProfileUpdate, profile};
use serde::Deserialize;

use crate::{ApiState, auth::validation, error::ApiError, validation::require_user_id};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/user/profile", get(get_profile).put(update_profile))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProfileQuery {
    user_id: Option<String>,
}

/// Get the profile of `userId`
async fn get_profile(
    State(state): State<ApiState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;
    let user = profile::user_profile(user_id, state.now(), &mut state.rng());

    Ok(Json(ProfileResponse {
        success: true,
        message: None,
        user_data: user,
    }))
}

/// Update the profile of `userId`.
///
/// Nothing is stored: the response echoes the merged profile.
async fn update_profile(
    State(state): State<ApiState>,
    query: Result<Query<ProfileQuery>, QueryRejection>,
    payload: Result<Json<ProfileUpdate>, JsonRejection>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let Query(query) = query?;
    let user_id = require_user_id(query.user_id.as_deref())?;
    let Json(update) = payload?;
    validate_update(&update)?;

    let mut user = profile::user_profile(user_id, state.now(), &mut state.rng());
    user.apply(ProfileUpdate {
        name: update.name.map(|n| n.trim().to_string()),
        email: update.email.map(|e| e.trim().to_lowercase()),
        phone: update.phone.map(|p| p.trim().to_string()),
    });
    tracing::info!(user_id, "Profile updated");

    Ok(Json(ProfileResponse {
        success: true,
        message: Some("Profile updated successfully".to_string()),
        user_data: user,
    }))
}

fn validate_update(update: &ProfileUpdate) -> Result<(), ApiError> {
    if let Some(name) = &update.name {
        validation::validate_name(name)?;
    }
    if let Some(email) = &update.email {
        validation::validate_email(email.trim())?;
    }
    if let Some(phone) = &update.phone {
        validation::validate_phone(phone)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_update() {
        assert!(validate_update(&ProfileUpdate::default()).is_ok());
        assert!(
            validate_update(&ProfileUpdate {
                email: Some("new@example.com".to_string()),
                ..Default::default()
            })
            .is_ok()
        );
        assert!(
            validate_update(&ProfileUpdate {
                phone: Some("12".to_string()),
                ..Default::default()
            })
            .is_err()
        );
        assert!(
            validate_update(&ProfileUpdate {
                name: Some(String::new()),
                ..Default::default()
            })
            .is_err()
        );
    }
}
