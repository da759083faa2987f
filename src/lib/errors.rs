use serde::Deserialize;
use std::fmt;

/// Shown when the server gives us nothing better to say.
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppError {
    Config(String),
    Validation(String),
    Network(String),
    Timeout(String),
    Http { status: u16, message: String },
    Unauthorized,
    Parse(String),
    Serialization(String),
    Payment(String),
}

impl AppError {
    /// Text for alert banners. Unlike `Display` this drops the category prefix
    /// so server-provided messages read naturally.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(message)
            | AppError::Network(message)
            | AppError::Timeout(message)
            | AppError::Payment(message)
            | AppError::Http { message, .. } => message.clone(),
            AppError::Unauthorized => "Your session has expired. Please sign in again.".to_string(),
            AppError::Config(_) | AppError::Parse(_) | AppError::Serialization(_) => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(message) => write!(formatter, "Config error: {message}"),
            AppError::Validation(message) => write!(formatter, "{message}"),
            AppError::Network(message) => write!(formatter, "Network error: {message}"),
            AppError::Timeout(message) => write!(formatter, "Timeout: {message}"),
            AppError::Http { status, message } => {
                write!(formatter, "Request failed ({status}): {message}")
            }
            AppError::Unauthorized => write!(formatter, "Session expired"),
            AppError::Parse(message) => write!(formatter, "Response error: {message}"),
            AppError::Serialization(message) => {
                write!(formatter, "Request error: {message}")
            }
            AppError::Payment(message) => write!(formatter, "Payment error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Turns an error response body into a user-facing message: the JSON
/// `message` field when there is one, otherwise the trimmed and truncated body.
pub fn message_from_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return GENERIC_FAILURE.to_string();
    }

    if let Ok(ErrorBody {
        message: Some(message),
    }) = serde_json::from_str::<ErrorBody>(trimmed)
    {
        let message = message.trim();
        if !message.is_empty() {
            return message.chars().take(MAX_ERROR_CHARS).collect();
        }
        return GENERIC_FAILURE.to_string();
    }

    trimmed.chars().take(MAX_ERROR_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::{AppError, GENERIC_FAILURE, message_from_body};

    #[test]
    fn message_from_body_prefers_json_message() {
        let body = r#"{"message":"Email already registered","code":409}"#;
        assert_eq!(message_from_body(body), "Email already registered");
    }

    #[test]
    fn message_from_body_falls_back_to_plain_text() {
        assert_eq!(message_from_body("  Bad Gateway \n"), "Bad Gateway");
    }

    #[test]
    fn message_from_body_uses_generic_text_for_empty_bodies() {
        assert_eq!(message_from_body(""), GENERIC_FAILURE);
        assert_eq!(message_from_body("   "), GENERIC_FAILURE);
        assert_eq!(message_from_body(r#"{"message":"  "}"#), GENERIC_FAILURE);
    }

    #[test]
    fn message_from_body_truncates_long_bodies() {
        let body = "x".repeat(1_000);
        assert_eq!(message_from_body(&body).chars().count(), 200);
    }

    #[test]
    fn json_without_message_is_shown_raw() {
        let body = r#"{"error":"nope"}"#;
        assert_eq!(message_from_body(body), body);
    }

    #[test]
    fn user_message_hides_internal_categories() {
        let http = AppError::Http {
            status: 422,
            message: "Age must be at least 18".to_string(),
        };
        assert_eq!(http.user_message(), "Age must be at least 18");
        assert_eq!(
            AppError::Parse("expected value at line 1".to_string()).user_message(),
            GENERIC_FAILURE
        );
        assert!(AppError::Unauthorized.user_message().contains("sign in"));
    }

    #[test]
    fn display_keeps_status_for_logs() {
        let err = AppError::Http {
            status: 500,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Request failed (500): boom");
    }
}
