use serde::{Deserialize, Deserializer, Serialize, de::IgnoredAny};
use std::fmt;

use super::pagination::PageInfo;

/// User identifier as the API sends it. Numeric and string ids both occur,
/// and the original form is echoed back (for example as `payableUserId`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(id) => write!(formatter, "{id}"),
            UserId::Text(id) => write!(formatter, "{id}"),
        }
    }
}

/// A user row as the API mirrors it back. Fields other than `id` are read
/// leniently so one odd row never sinks the whole page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    /// Multipart updates echo the age back as text, so `"40"` and `40` both
    /// count; anything else is shown as unknown.
    #[serde(default, deserialize_with = "lenient_age")]
    pub age: Option<u32>,
    /// Avatar image URLs. The API sends `null` or omits the field for users
    /// without avatars.
    #[serde(default)]
    pub avatars: Option<Vec<String>>,
}

impl User {
    pub fn avatars(&self) -> &[String] {
        self.avatars.as_deref().unwrap_or_default()
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAge {
    Number(u32),
    Text(String),
    Other(IgnoredAny),
}

fn lenient_age<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    Ok(match Option::<RawAge>::deserialize(deserializer)? {
        Some(RawAge::Number(age)) => Some(age),
        Some(RawAge::Text(text)) => text.trim().parse().ok(),
        Some(RawAge::Other(_)) | None => None,
    })
}

/// One page of the user list plus the pagination headers that came with it.
#[derive(Clone, Debug, PartialEq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub info: PageInfo,
}

/// Raw form input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserFormValues {
    pub name: String,
    pub email: String,
    pub age: String,
}

impl UserFormValues {
    /// Prefills the form from an existing record when editing.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            age: user.age.map(|age| age.to_string()).unwrap_or_default(),
        }
    }
}

/// Form input that passed validation and is ready to submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidUser {
    pub name: String,
    pub email: String,
    pub age: u32,
}

#[cfg(test)]
mod tests {
    use super::{User, UserFormValues, UserId};

    #[test]
    fn user_parses_numeric_and_string_ids() {
        let numeric: User = serde_json::from_str(
            r#"{"id":7,"name":"Ada","email":"ada@roster.dev","age":36,"avatars":["/a.png"]}"#,
        )
        .expect("numeric id should parse");
        assert_eq!(numeric.id, UserId::Number(7));
        assert_eq!(numeric.avatars(), ["/a.png".to_string()]);

        let text: User = serde_json::from_str(
            r#"{"id":"65f1c0","name":"Lin","email":"lin@roster.dev","avatars":null}"#,
        )
        .expect("string id should parse");
        assert_eq!(text.id, UserId::Text("65f1c0".to_string()));
        assert_eq!(text.age, None);
        assert!(text.avatars().is_empty());
    }

    #[test]
    fn page_survives_text_ages_and_null_fields() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id":1,"name":"Ada","email":"ada@roster.dev","age":"40"},
                {"id":2,"name":null,"email":null,"age":36},
                {"id":3,"age":"unknown"},
                {"id":4,"name":"Lin","email":"lin@roster.dev","age":-3}
            ]"#,
        )
        .expect("page should parse");

        assert_eq!(users.len(), 4);
        assert_eq!(users[0].age, Some(40));
        assert_eq!(users[1].name, "");
        assert_eq!(users[1].email, "");
        assert_eq!(users[1].age, Some(36));
        assert_eq!(users[2].name, "");
        assert_eq!(users[2].age, None);
        assert_eq!(users[3].age, None);
    }

    #[test]
    fn user_id_displays_for_paths_and_serializes_verbatim() {
        assert_eq!(UserId::Number(42).to_string(), "42");
        assert_eq!(UserId::Text("abc".to_string()).to_string(), "abc");
        assert_eq!(
            serde_json::to_string(&UserId::Number(42)).expect("id should serialize"),
            "42"
        );
        assert_eq!(
            serde_json::to_string(&UserId::Text("abc".to_string())).expect("id should serialize"),
            "\"abc\""
        );
    }

    #[test]
    fn form_values_prefill_from_user() {
        let user = User {
            id: UserId::Number(1),
            name: "Ada".to_string(),
            email: "ada@roster.dev".to_string(),
            age: Some(36),
            avatars: None,
        };
        let values = UserFormValues::from_user(&user);
        assert_eq!(values.name, "Ada");
        assert_eq!(values.age, "36");

        let without_age = User { age: None, ..user };
        assert_eq!(UserFormValues::from_user(&without_age).age, "");
    }
}
