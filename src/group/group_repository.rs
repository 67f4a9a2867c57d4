use crate::error::Result;
use crate::list_query::ListQuery;
use crate::pagination::PageRequest;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use super::group_models::StudentGroup;

#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, room_number: &str) -> Result<StudentGroup> {
        let group = sqlx::query_as::<_, StudentGroup>(
            "INSERT INTO student_groups (name, room_number)
             VALUES ($1, $2)
             RETURNING *"
        )
        .bind(name)
        .bind(room_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(group)
    }

    pub async fn find_by_id(&self, group_id: Uuid) -> Result<Option<StudentGroup>> {
        let group = sqlx::query_as::<_, StudentGroup>(
            "SELECT * FROM student_groups WHERE id = $1"
        )
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    /// One page of groups plus the total number of matching rows.
    pub async fn find_all(&self, query: &ListQuery, page: &PageRequest) -> Result<(Vec<StudentGroup>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM student_groups g");
        query.push_conditions(&mut count_query);
        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let mut list_query = QueryBuilder::<Postgres>::new("SELECT g.* FROM student_groups g");
        query.push_conditions(&mut list_query);
        query.push_order_by(&mut list_query);
        page.push_limit_offset(&mut list_query);

        let groups = list_query
            .build_query_as::<StudentGroup>()
            .fetch_all(&self.pool)
            .await?;

        Ok((groups, total))
    }

    /// Returns `None` when no group has that id.
    pub async fn update(
        &self,
        group_id: Uuid,
        name: Option<&str>,
        room_number: Option<&str>,
    ) -> Result<Option<StudentGroup>> {
        let group = sqlx::query_as::<_, StudentGroup>(
            "UPDATE student_groups
             SET name = COALESCE($1, name),
                 room_number = COALESCE($2, room_number),
                 updated_at = NOW()
             WHERE id = $3
             RETURNING *"
        )
        .bind(name)
        .bind(room_number)
        .bind(group_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(group)
    }

    /// Returns whether a row was deleted.
    pub async fn delete(&self, group_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM student_groups WHERE id = $1")
            .bind(group_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
