//! Client-side checks run before credentials leave the browser. The API still
//! validates everything; these only give early feedback.

use crate::app_lib::AppError;
use regex::Regex;

/// `something@something.something` with no whitespace and one `@`.
pub fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Validates the login/register form. The email is expected to be trimmed.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AppError> {
    if email.is_empty() || password.is_empty() {
        return Err(AppError::Validation("Please fill in all fields".to_string()));
    }
    if !is_valid_email(email) {
        return Err(AppError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{is_valid_email, validate_credentials};
    use crate::app_lib::AppError;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("ops@roster.dev"));
        assert!(is_valid_email("first.last+tag@mail.example.co"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        for email in ["plain", "no-domain@", "@no-local.io", "a@b", "a b@c.io", "a@@b.io"] {
            assert!(!is_valid_email(email), "{email} should be rejected");
        }
    }

    #[test]
    fn missing_fields_are_reported_first() {
        assert_eq!(
            validate_credentials("", "secret"),
            Err(AppError::Validation("Please fill in all fields".to_string()))
        );
        assert_eq!(
            validate_credentials("not-an-email", ""),
            Err(AppError::Validation("Please fill in all fields".to_string()))
        );
    }

    #[test]
    fn bad_email_is_reported() {
        assert_eq!(
            validate_credentials("not-an-email", "secret"),
            Err(AppError::Validation(
                "Please enter a valid email address".to_string()
            ))
        );
        assert_eq!(validate_credentials("ops@roster.dev", "secret"), Ok(()));
    }
}
