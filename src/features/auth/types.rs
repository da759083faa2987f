//! Request and response types for the login, register and logout endpoints.
//! `Credentials` carries the plain password, so never log it.

use serde::{Deserialize, Serialize};

/// Which form the auth screen is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    pub fn toggle(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        }
    }

    /// Endpoint the credentials are posted to.
    pub fn path(self) -> &'static str {
        match self {
            AuthMode::Login => "/login",
            AuthMode::Register => "/register",
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome Back",
            AuthMode::Register => "Create Account",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Login => "Please sign in to continue",
            AuthMode::Register => "Register to get started",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign In",
            AuthMode::Register => "Register",
        }
    }

    pub fn pending_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Signing in...",
            AuthMode::Register => "Registering...",
        }
    }

    /// Text of the link that flips to the other mode.
    pub fn switch_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Don't have an account? Sign up",
            AuthMode::Register => "Already have an account? Sign in",
        }
    }
}

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Body of a successful login or register call. The token may instead come
/// back in the `Authorization` response header.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthResponse {
    /// Reads a successful auth body. Empty and non-JSON bodies are valid when
    /// the token travels in the header, so they read as an empty response.
    pub fn from_body(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Token and email worth persisting after a successful sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub email: String,
}

impl Session {
    /// Picks the header token over the body token and the response email over
    /// the submitted one. Returns `None` when the API handed out no token.
    pub fn resolve(
        header_token: Option<String>,
        response: AuthResponse,
        submitted_email: &str,
    ) -> Option<Self> {
        let token = header_token
            .filter(|value| !value.trim().is_empty())
            .or(response.token.filter(|value| !value.trim().is_empty()))?;
        let email = response
            .email
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| submitted_email.to_string());

        Some(Self { token, email })
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct LogoutRequest {
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::{AuthMode, AuthResponse, Credentials, Session};

    #[test]
    fn mode_toggles_and_targets_endpoint() {
        assert_eq!(AuthMode::default(), AuthMode::Login);
        assert_eq!(AuthMode::Login.toggle(), AuthMode::Register);
        assert_eq!(AuthMode::Register.toggle(), AuthMode::Login);
        assert_eq!(AuthMode::Login.path(), "/login");
        assert_eq!(AuthMode::Register.path(), "/register");
        assert_eq!(AuthMode::Register.pending_label(), "Registering...");
    }

    #[test]
    fn header_token_wins_over_body_token() {
        let response = AuthResponse {
            email: Some("ops@roster.dev".to_string()),
            token: Some("body-token".to_string()),
        };
        let session = Session::resolve(Some("header-token".to_string()), response, "typed@x.io");

        assert_eq!(
            session,
            Some(Session {
                token: "header-token".to_string(),
                email: "ops@roster.dev".to_string(),
            })
        );
    }

    #[test]
    fn body_token_and_submitted_email_are_fallbacks() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"body-token"}"#)
            .expect("auth response should parse");
        let session = Session::resolve(Some("  ".to_string()), response, "typed@x.io")
            .expect("body token should be used");

        assert_eq!(session.token, "body-token");
        assert_eq!(session.email, "typed@x.io");
    }

    #[test]
    fn header_token_survives_empty_or_plain_text_body() {
        for body in ["", "OK", "  \n"] {
            let session = Session::resolve(
                Some("header-token".to_string()),
                AuthResponse::from_body(body),
                "typed@x.io",
            );
            assert_eq!(
                session,
                Some(Session {
                    token: "header-token".to_string(),
                    email: "typed@x.io".to_string(),
                }),
                "body {body:?}"
            );
        }
    }

    #[test]
    fn json_body_is_still_read() {
        let response = AuthResponse::from_body(r#"{"email":"ops@roster.dev","token":"t-1"}"#);
        assert_eq!(response.token.as_deref(), Some("t-1"));
        assert_eq!(response.email.as_deref(), Some("ops@roster.dev"));
    }

    #[test]
    fn missing_token_yields_no_session() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"email":"ops@roster.dev","message":"ok"}"#)
                .expect("auth response should parse");
        assert_eq!(Session::resolve(None, response, "ops@roster.dev"), None);
    }

    #[test]
    fn credentials_serialize_as_plain_fields() {
        let json = serde_json::to_value(Credentials {
            email: "ops@roster.dev".to_string(),
            password: "hunter22".to_string(),
        })
        .expect("credentials should serialize");

        assert_eq!(json["email"], "ops@roster.dev");
        assert_eq!(json["password"], "hunter22");
    }
}
