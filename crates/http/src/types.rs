//! Request and response bodies of the authentication API

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Login request body
///
/// Either `email` or `username` identifies the account; absent keys are
/// omitted from the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub password: String,
}

impl LoginRequest {
    /// Login with an email address
    pub fn with_email(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            username: None,
            password: password.into(),
        }
    }

    /// Login with a username
    pub fn with_username(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: None,
            username: Some(username.into()),
            password: password.into(),
        }
    }

    /// Build a request from a single free-form identifier field.
    ///
    /// Identifiers containing `@` are sent as `email`, anything else as
    /// `username`.
    pub fn from_identifier(identifier: &str, password: impl Into<String>) -> Self {
        let identifier = identifier.trim();
        if identifier.contains('@') {
            Self::with_email(identifier, password)
        } else {
            Self::with_username(identifier, password)
        }
    }

    /// The identifier that will be sent, whichever key carries it
    pub fn identifier(&self) -> Option<&str> {
        self.email.as_deref().or(self.username.as_deref())
    }
}

/// Token lifetime as reported by the server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExpiresIn {
    /// Lifetime in seconds
    Seconds(u64),
    /// Textual duration such as `"24h"`
    Text(String),
}

/// User record returned alongside the token
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl AuthUser {
    /// Best available label for the signed-in user
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .or(self.username.as_deref())
            .or(self.email.as_deref())
    }
}

/// Successful login response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    #[serde(
        rename = "expiresIn",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expires_in: Option<ExpiresIn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AuthUser>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_identifier_routing() {
        let by_email = LoginRequest::from_identifier("  ana@example.com ", "secret");
        assert_eq!(by_email.email.as_deref(), Some("ana@example.com"));
        assert!(by_email.username.is_none());

        let by_username = LoginRequest::from_identifier("ana", "secret");
        assert_eq!(by_username.username.as_deref(), Some("ana"));
        assert!(by_username.email.is_none());
        assert_eq!(by_username.identifier(), Some("ana"));
    }

    #[test]
    fn test_request_omits_absent_keys() {
        let body = serde_json::to_value(LoginRequest::with_email("ana@example.com", "pw")).unwrap();
        assert_eq!(body, json!({"email": "ana@example.com", "password": "pw"}));
    }

    #[test]
    fn test_response_minimal() {
        let response: LoginResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
        assert_eq!(response.token, "abc");
        assert!(response.expires_in.is_none());
        assert!(response.user.is_none());
    }

    #[test]
    fn test_response_full() {
        let response: LoginResponse = serde_json::from_value(json!({
            "token": "abc",
            "expiresIn": "24h",
            "user": {"id": 7, "email": "ana@example.com", "role": "admin"}
        }))
        .unwrap();

        assert_eq!(response.expires_in, Some(ExpiresIn::Text("24h".to_string())));
        let user = response.user.unwrap();
        assert_eq!(user.id, Some(json!(7)));
        assert_eq!(user.display_name(), Some("ana@example.com"));
        assert_eq!(user.extra.get("role"), Some(&json!("admin")));
    }

    #[test]
    fn test_response_numeric_expiry() {
        let response: LoginResponse =
            serde_json::from_value(json!({"token": "abc", "expiresIn": 3600})).unwrap();
        assert_eq!(response.expires_in, Some(ExpiresIn::Seconds(3600)));
    }
}
