//! Serde and validator helpers shared by the request bodies.

use std::borrow::Cow;

use serde::{de::Error as _, Deserialize, Deserializer};
use validator::ValidationError;

pub const NULL_CHARACTERS_MESSAGE: &str = "Null characters are not allowed.";

/// Deserialize a string with surrounding whitespace removed.
pub fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}

/// Optional string for partial updates: an absent key stays `None` (with
/// `#[serde(default)]`), an explicit `null` is rejected.
pub fn trimmed_non_null<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Err(D::Error::custom("This field may not be null.")),
    }
}

/// PostgreSQL text columns can't hold NUL.
pub fn no_null_chars(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("null_characters");
        error.message = Some(Cow::Borrowed(NULL_CHARACTERS_MESSAGE));
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Body {
        #[serde(deserialize_with = "trimmed")]
        name: String,
        #[serde(default, deserialize_with = "trimmed_non_null")]
        label: Option<String>,
    }

    #[test]
    fn test_trims_whitespace() {
        let body: Body = serde_json::from_str(r#"{"name": "  Ana  ", "label": " x "}"#).unwrap();
        assert_eq!(body.name, "Ana");
        assert_eq!(body.label.as_deref(), Some("x"));
    }

    #[test]
    fn test_absent_optional_is_none() {
        let body: Body = serde_json::from_str(r#"{"name": "Ana"}"#).unwrap();
        assert_eq!(body.label, None);
    }

    #[test]
    fn test_explicit_null_is_rejected() {
        let err = serde_json::from_str::<Body>(r#"{"name": "Ana", "label": null}"#).unwrap_err();
        assert!(err.to_string().contains("This field may not be null."));
    }

    #[test]
    fn test_no_null_chars() {
        assert!(no_null_chars("plain").is_ok());
        let error = no_null_chars("a\0b").unwrap_err();
        assert_eq!(error.message.as_deref(), Some(NULL_CHARACTERS_MESSAGE));
    }
}
