use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a failure envelope
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Malformed session data: {0}")]
    Session(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status of an API failure, if the server answered at all.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for a notification.
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Could not reach the server. Please try again.".to_string(),
            Self::Api { message, .. } => message.clone(),
            Self::Session(_) => "Your session data was invalid. Please log in again.".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_shows_server_message() {
        let err = ClientError::Api {
            status: 401,
            message: "Invalid email or password".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(err.user_message(), "Invalid email or password");
        assert_eq!(err.status(), Some(401));
    }

    #[test]
    fn test_session_error_hides_parser_detail() {
        let err = ClientError::from(serde_json::from_str::<u32>("nope").unwrap_err());
        assert_eq!(err.status(), None);
        assert!(!err.user_message().contains("expected"));
    }
}
