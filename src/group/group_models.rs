use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::list_query::{FieldKind, FilterField, OrderTerm, OrderingField, ResourceConfig};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StudentGroup {
    pub id: Uuid,
    pub name: String,
    pub room_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Filters, search and ordering accepted by `GET /api/groups`.
pub static GROUP_LIST: ResourceConfig = ResourceConfig {
    filter_fields: &[
        FilterField { name: "name", column: "g.name", kind: FieldKind::Text },
        FilterField { name: "room_number", column: "g.room_number", kind: FieldKind::Text },
    ],
    search_columns: &["g.name", "g.room_number"],
    ordering_fields: &[
        OrderingField { name: "name", column: "g.name" },
        OrderingField { name: "created_at", column: "g.created_at" },
        OrderingField { name: "updated_at", column: "g.updated_at" },
    ],
    default_ordering: &[OrderTerm::desc("g.created_at")],
    primary_key: "g.id",
};
