use crate::error::ApiError;

/// Longest accepted user id
const MAX_USER_ID_LEN: usize = 64;

/// Validate the `userId` query parameter and return it trimmed.
///
/// # Examples
/// ```
/// use civic_api::validation::require_user_id;
///
/// assert_eq!(require_user_id(Some(" u1 ")).unwrap(), "u1");
/// assert!(require_user_id(None).is_err());
/// ```
pub fn require_user_id(user_id: Option<&str>) -> Result<&str, ApiError> {
    let user_id = user_id.map(str::trim).unwrap_or_default();

    if user_id.is_empty() {
        return Err(ApiError::Validation("userId is required".to_string()));
    }

    if user_id.len() > MAX_USER_ID_LEN {
        return Err(ApiError::Validation(format!(
            "userId must be at most {MAX_USER_ID_LEN} characters long"
        )));
    }

    if !user_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(ApiError::Validation(
            "userId can only contain letters, numbers, underscores, and hyphens".to_string(),
        ));
    }

    Ok(user_id)
}

/// Parse an optional non-negative count such as `limit` or `offset`.
///
/// Missing values fall back to `default`; values above `max` are clamped.
pub fn parse_count(
    name: &str,
    raw: Option<&str>,
    default: usize,
    max: usize,
) -> Result<usize, ApiError> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(default);
    };

    raw.parse::<usize>()
        .map(|value| value.min(max))
        .map_err(|_| ApiError::Validation(format!("{name} must be a non-negative integer")))
}
