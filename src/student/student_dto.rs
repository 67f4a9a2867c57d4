use serde::{Deserialize, Deserializer};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::fields::{no_null_chars, trimmed, trimmed_non_null};

/// Body of `POST /api/students` and `PUT /api/students/{id}`.
///
/// `group` may be omitted, `null`, or a group id.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 255, message = "Ensure this field has between 1 and 255 characters."),
        custom(function = "no_null_chars")
    )]
    pub full_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 50, message = "Ensure this field has between 1 and 50 characters."),
        custom(function = "no_null_chars")
    )]
    pub code: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: String,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Uuid>)]
    pub group: Option<Option<Uuid>>,
}

/// Body of `PATCH /api/students/{id}`. Text keys may be omitted but not `null`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentRequest {
    #[serde(default, deserialize_with = "trimmed_non_null")]
    #[validate(
        length(min = 1, max = 255, message = "Ensure this field has between 1 and 255 characters."),
        custom(function = "no_null_chars")
    )]
    pub full_name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_non_null")]
    #[validate(
        length(min = 1, max = 50, message = "Ensure this field has between 1 and 50 characters."),
        custom(function = "no_null_chars")
    )]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "trimmed_non_null")]
    #[validate(
        email(message = "Enter a valid email address."),
        length(max = 254, message = "Ensure this field has no more than 254 characters.")
    )]
    pub email: Option<String>,
    /// Omitted leaves the group unchanged, `null` detaches the student.
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<Uuid>)]
    pub group: Option<Option<Uuid>>,
}

impl From<CreateStudentRequest> for UpdateStudentRequest {
    fn from(request: CreateStudentRequest) -> Self {
        Self {
            full_name: Some(request.full_name),
            code: Some(request.code),
            email: Some(request.email),
            group: request.group,
        }
    }
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<Uuid>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Uuid>::deserialize(deserializer).map(Some)
}
