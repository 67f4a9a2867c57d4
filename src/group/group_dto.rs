use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::fields::{no_null_chars, trimmed, trimmed_non_null};

/// Body of `POST /api/groups` and `PUT /api/groups/{id}`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentGroupRequest {
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 100, message = "Ensure this field has between 1 and 100 characters."),
        custom(function = "no_null_chars")
    )]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(
        length(min = 1, max = 20, message = "Ensure this field has between 1 and 20 characters."),
        custom(function = "no_null_chars")
    )]
    pub room_number: String,
}

/// Body of `PATCH /api/groups/{id}`. Keys may be omitted but not `null`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentGroupRequest {
    #[serde(default, deserialize_with = "trimmed_non_null")]
    #[validate(
        length(min = 1, max = 100, message = "Ensure this field has between 1 and 100 characters."),
        custom(function = "no_null_chars")
    )]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "trimmed_non_null")]
    #[validate(
        length(min = 1, max = 20, message = "Ensure this field has between 1 and 20 characters."),
        custom(function = "no_null_chars")
    )]
    pub room_number: Option<String>,
}

impl From<CreateStudentGroupRequest> for UpdateStudentGroupRequest {
    fn from(request: CreateStudentGroupRequest) -> Self {
        Self {
            name: Some(request.name),
            room_number: Some(request.room_number),
        }
    }
}
