use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::group::StudentGroup;
use crate::list_query::{FieldKind, FilterField, OrderTerm, OrderingField, ResourceConfig};

/// A row of the `students` table.
#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: Uuid,
    pub full_name: String,
    pub code: String,
    pub email: String,
    pub group_id: Option<Uuid>,
}

/// A student joined with its group in one query.
#[derive(Debug, Clone, FromRow)]
pub struct StudentWithGroupRow {
    pub id: Uuid,
    pub full_name: String,
    pub code: String,
    pub email: String,
    pub group_id: Option<Uuid>,
    pub group_name: Option<String>,
    pub group_room_number: Option<String>,
    pub group_created_at: Option<DateTime<Utc>>,
    pub group_updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StudentResponse {
    pub id: Uuid,
    pub full_name: String,
    pub code: String,
    pub email: String,
    pub group: Option<StudentGroup>,
}

impl StudentResponse {
    pub fn from_parts(student: Student, group: Option<StudentGroup>) -> Self {
        Self {
            id: student.id,
            full_name: student.full_name,
            code: student.code,
            email: student.email,
            group,
        }
    }
}

impl From<StudentWithGroupRow> for StudentResponse {
    fn from(row: StudentWithGroupRow) -> Self {
        let group = match (
            row.group_id,
            row.group_name,
            row.group_room_number,
            row.group_created_at,
            row.group_updated_at,
        ) {
            (Some(id), Some(name), Some(room_number), Some(created_at), Some(updated_at)) => {
                Some(StudentGroup {
                    id,
                    name,
                    room_number,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            full_name: row.full_name,
            code: row.code,
            email: row.email,
            group,
        }
    }
}

/// Filters, search and ordering accepted by `GET /api/students`.
pub static STUDENT_LIST: ResourceConfig = ResourceConfig {
    filter_fields: &[
        FilterField { name: "code", column: "s.code", kind: FieldKind::Text },
        FilterField { name: "email", column: "s.email", kind: FieldKind::Text },
        FilterField { name: "group", column: "s.group_id", kind: FieldKind::Uuid },
    ],
    search_columns: &["s.full_name", "s.code", "s.email"],
    ordering_fields: &[
        OrderingField { name: "full_name", column: "s.full_name" },
        OrderingField { name: "code", column: "s.code" },
        OrderingField { name: "email", column: "s.email" },
        OrderingField { name: "group", column: "s.group_id" },
    ],
    default_ordering: &[OrderTerm::asc("s.code")],
    primary_key: "s.id",
};
