use serde::{Deserialize, Serialize};

use crate::models::string_or_number;

/// The logged-in identity as persisted in the session store.
///
/// Wire shape: `{"id"?, "name", "email"?, "skills"?}`. `skills` is the raw
/// comma-separated string the user typed; normalization happens at the point
/// of use (see `skills::gap`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
}

impl User {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: None,
            skills: None,
        }
    }

    /// Skills as entered, or `None` when the string is blank.
    pub fn skills_text(&self) -> Option<&str> {
        self.skills.as_deref().filter(|s| !s.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_minimal_json_deserializes() {
        let user: User = serde_json::from_str(r#"{"name":"asha"}"#).unwrap();
        assert_eq!(user, User::named("asha"));
    }

    #[test]
    fn test_user_numeric_id_is_read_as_string() {
        let user: User = serde_json::from_str(r#"{"id":42,"name":"asha"}"#).unwrap();
        assert_eq!(user.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_user_serialization_omits_absent_fields() {
        let json = serde_json::to_string(&User::named("asha")).unwrap();
        assert_eq!(json, r#"{"name":"asha"}"#);
    }

    #[test]
    fn test_blank_skills_text_is_none() {
        let mut user = User::named("asha");
        user.skills = Some("   ".to_string());
        assert!(user.skills_text().is_none());
    }
}
