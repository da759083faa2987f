//! Per-field validation for the add/edit user form. Every field is checked so
//! all messages can be shown at once; each field reports its first failure.

use super::types::{UserFormValues, ValidUser};
use crate::features::auth::validation::is_valid_email;

/// Youngest age the form accepts.
pub const MINIMUM_AGE: u32 = 18;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.age.is_none()
    }
}

pub fn validate_user_form(values: &UserFormValues) -> Result<ValidUser, FieldErrors> {
    let name = values.name.trim();
    let email = values.email.trim();
    let age = check_age(&values.age);

    let errors = FieldErrors {
        name: name.is_empty().then(|| "Name is required".to_string()),
        email: check_email(email),
        age: age.clone().err(),
    };

    match age {
        Ok(age) if errors.is_empty() => Ok(ValidUser {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }),
        _ => Err(errors),
    }
}

fn check_email(email: &str) -> Option<String> {
    if email.is_empty() {
        Some("Email is required".to_string())
    } else if !is_valid_email(email) {
        Some("Invalid email format".to_string())
    } else {
        None
    }
}

/// Checks in order: present, numeric, positive, old enough, whole, in range.
fn check_age(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Age is required".to_string());
    }

    let value: f64 = raw
        .parse()
        .ok()
        .filter(|value: &f64| value.is_finite())
        .ok_or_else(|| "Age must be a number".to_string())?;

    if value <= 0.0 {
        return Err("Age must be a positive number".to_string());
    }
    if value < f64::from(MINIMUM_AGE) {
        return Err(format!("You must be at least {MINIMUM_AGE} years old"));
    }
    if value.fract() != 0.0 {
        return Err("Age must be an integer".to_string());
    }
    if value > f64::from(u32::MAX) {
        return Err("Age is too large".to_string());
    }

    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::{FieldErrors, validate_user_form};
    use crate::features::users::types::{UserFormValues, ValidUser};

    fn values(name: &str, email: &str, age: &str) -> UserFormValues {
        UserFormValues {
            name: name.to_string(),
            email: email.to_string(),
            age: age.to_string(),
        }
    }

    #[test]
    fn valid_form_is_trimmed_and_typed() {
        let result = validate_user_form(&values("  Ada ", " ada@roster.dev ", " 36 "));
        assert_eq!(
            result,
            Ok(ValidUser {
                name: "Ada".to_string(),
                email: "ada@roster.dev".to_string(),
                age: 36,
            })
        );
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate_user_form(&UserFormValues::default()).expect_err("form is empty");
        assert_eq!(
            errors,
            FieldErrors {
                name: Some("Name is required".to_string()),
                email: Some("Email is required".to_string()),
                age: Some("Age is required".to_string()),
            }
        );
    }

    #[test]
    fn malformed_email_is_flagged() {
        let errors = validate_user_form(&values("Ada", "ada.roster.dev", "30"))
            .expect_err("email is malformed");
        assert_eq!(errors.email.as_deref(), Some("Invalid email format"));
        assert_eq!(errors.name, None);
        assert_eq!(errors.age, None);
    }

    #[test]
    fn age_rules_apply_in_order() {
        let age_error = |age: &str| {
            validate_user_form(&values("Ada", "ada@roster.dev", age))
                .expect_err("age should be rejected")
                .age
        };

        assert_eq!(age_error("old").as_deref(), Some("Age must be a number"));
        assert_eq!(age_error("-4").as_deref(), Some("Age must be a positive number"));
        assert_eq!(age_error("0").as_deref(), Some("Age must be a positive number"));
        assert_eq!(age_error("17").as_deref(), Some("You must be at least 18 years old"));
        assert_eq!(age_error("20.5").as_deref(), Some("Age must be an integer"));
        assert_eq!(age_error("5000000000").as_deref(), Some("Age is too large"));
    }

    #[test]
    fn eighteen_is_old_enough() {
        let user = validate_user_form(&values("Ada", "ada@roster.dev", "18"))
            .expect("18 is allowed");
        assert_eq!(user.age, 18);
    }
}
