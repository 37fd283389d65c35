//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Request body failed server-side validation
    #[error("Unprocessable entity: {0}")]
    UnprocessableEntity(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            422 => Self::UnprocessableEntity(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::UnprocessableEntity(_) => Some(422),
            Self::ServerError { status, .. } => Some(*status),
            Self::Request(error) => error.status().map(|s| s.as_u16()),
            Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Raw body the server sent with a non-2xx response
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::UnprocessableEntity(message)
            | Self::ServerError { message, .. } => Some(message),
            Self::Request(_) | Self::Serialization(_) | Self::Configuration(_) => None,
        }
    }

    /// Whether the request never produced an HTTP response
    ///
    /// Builder failures (a malformed URL, a bad header) are not transport
    /// problems: the request was never attempted.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Request(error)
                if error.status().is_none() && !error.is_decode() && !error.is_builder()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        let cases = [
            (StatusCode::BAD_REQUEST, 400),
            (StatusCode::UNAUTHORIZED, 401),
            (StatusCode::FORBIDDEN, 403),
            (StatusCode::NOT_FOUND, 404),
            (StatusCode::UNPROCESSABLE_ENTITY, 422),
            (StatusCode::INTERNAL_SERVER_ERROR, 500),
        ];

        for (status, code) in cases {
            let error = ClientError::from_status(status, "body".to_string());
            assert_eq!(error.status(), Some(code));
            assert_eq!(error.server_message(), Some("body"));
            assert!(!error.is_transport());
        }
    }

    #[test]
    fn test_unauthorized_variant() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, "nope".to_string());
        assert!(matches!(error, ClientError::AuthenticationFailed(ref m) if m == "nope"));
    }

    #[test]
    fn test_configuration_has_no_server_message() {
        let error = ClientError::Configuration("base_url is required".into());
        assert!(error.server_message().is_none());
        assert!(error.status().is_none());
        assert_eq!(
            error.to_string(),
            "Invalid configuration: base_url is required"
        );
    }
}
