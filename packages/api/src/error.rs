//! Typed errors returned by every [`crate::RecipeApi`] call.

use serde::Deserialize;

use crate::endpoint::Endpoint;

/// What went wrong, so screens can switch on it instead of on message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required field was empty; caught before any request is made.
    Validation,
    /// Missing or rejected bearer token. Screens redirect to sign-in.
    Auth,
    /// The backend answered with a non-success status.
    Server,
    /// Transport or decoding failure.
    Unknown,
}

/// An error with a message fit for showing to the user.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
}

/// Error payload the backend sends with non-success responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    error: Option<String>,
    message: Option<String>,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// No token available for a protected call.
    pub fn missing_token() -> Self {
        Self::new(ErrorKind::Auth, "Please sign in to continue.")
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unknown, message)
    }

    pub fn is_auth(&self) -> bool {
        self.kind == ErrorKind::Auth
    }

    /// Build the error for a non-success response.
    ///
    /// The message is the body's `error` field, else its `message` field, else the
    /// endpoint's fixed fallback. 401/403 from a bearer-protected endpoint is an
    /// [`ErrorKind::Auth`]; everything else is [`ErrorKind::Server`].
    pub fn from_response(endpoint: Endpoint, status: u16, body: &str) -> Self {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let message = [parsed.error, parsed.message]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
            .unwrap_or_else(|| endpoint.fallback_message().to_string());

        let kind = if endpoint.requires_token() && matches!(status, 401 | 403) {
            ErrorKind::Auth
        } else {
            ErrorKind::Server
        };
        Self { kind, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::unknown(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_field_wins() {
        let err = ApiError::from_response(
            Endpoint::SignIn,
            400,
            r#"{"error":"Invalid credentials","message":"ignored"}"#,
        );
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "Invalid credentials");
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_message_field_used_when_no_error() {
        let err = ApiError::from_response(
            Endpoint::SignUp,
            409,
            r#"{"message":"User already exists"}"#,
        );
        assert_eq!(err.message, "User already exists");
    }

    #[test]
    fn test_fallback_on_unparseable_or_empty_body() {
        let err = ApiError::from_response(Endpoint::GenerateRecipe, 500, "<html>oops</html>");
        assert_eq!(err.message, "Failed to generate recipe.");

        let err = ApiError::from_response(Endpoint::ListRecipes, 500, "");
        assert_eq!(err.message, "Failed to fetch recipes.");

        let err = ApiError::from_response(Endpoint::SignIn, 500, r#"{"error":"  "}"#);
        assert_eq!(err.message, "Something went wrong.");
    }

    #[test]
    fn test_unauthorized_on_protected_endpoint_is_auth() {
        let err = ApiError::from_response(
            Endpoint::DeleteRecipe,
            401,
            r#"{"error":"Token expired"}"#,
        );
        assert!(err.is_auth());
        assert_eq!(err.message, "Token expired");

        let err = ApiError::from_response(Endpoint::SaveRecipe, 403, "");
        assert_eq!(err.kind, ErrorKind::Auth);
    }

    #[test]
    fn test_bad_credentials_are_not_auth_errors() {
        let err = ApiError::from_response(Endpoint::SignIn, 401, r#"{"error":"Wrong password"}"#);
        assert_eq!(err.kind, ErrorKind::Server);
        assert_eq!(err.message, "Wrong password");
    }
}
