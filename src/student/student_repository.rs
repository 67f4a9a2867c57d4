use crate::error::{AppError, Result};
use crate::list_query::ListQuery;
use crate::pagination::PageRequest;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;
use super::student_models::{Student, StudentWithGroupRow};

macro_rules! select_with_group {
    () => {
        "SELECT s.id, s.full_name, s.code, s.email, s.group_id,
                g.name AS group_name,
                g.room_number AS group_room_number,
                g.created_at AS group_created_at,
                g.updated_at AS group_updated_at
         FROM students s
         LEFT JOIN student_groups g ON g.id = s.group_id"
    };
}

const CODE_UNIQUE_CONSTRAINT: &str = "students_code_key";

#[derive(Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        full_name: &str,
        code: &str,
        email: &str,
        group_id: Option<Uuid>,
    ) -> Result<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (full_name, code, email, group_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, full_name, code, email, group_id"
        )
        .bind(full_name)
        .bind(code)
        .bind(email)
        .bind(group_id)
        .fetch_one(&self.pool)
        .await
        .map_err(constraint_error)?;

        Ok(student)
    }

    /// Reads the student row alone, without its group.
    pub async fn find_by_id(&self, student_id: Uuid) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "SELECT id, full_name, code, email, group_id FROM students WHERE id = $1"
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(student)
    }

    pub async fn find_with_group(&self, student_id: Uuid) -> Result<Option<StudentWithGroupRow>> {
        let row = sqlx::query_as::<_, StudentWithGroupRow>(
            concat!(select_with_group!(), " WHERE s.id = $1")
        )
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }

    /// One page of students with their groups joined in, plus the total
    /// number of matching rows.
    pub async fn find_all(&self, query: &ListQuery, page: &PageRequest) -> Result<(Vec<StudentWithGroupRow>, i64)> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM students s");
        query.push_conditions(&mut count_query);
        let total: i64 = count_query
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await?;

        let mut list_query = QueryBuilder::<Postgres>::new(select_with_group!());
        query.push_conditions(&mut list_query);
        query.push_order_by(&mut list_query);
        page.push_limit_offset(&mut list_query);

        let rows = list_query
            .build_query_as::<StudentWithGroupRow>()
            .fetch_all(&self.pool)
            .await?;

        Ok((rows, total))
    }

    /// Overwrites every writable column. Returns `None` when no student has that id.
    pub async fn update(
        &self,
        student_id: Uuid,
        full_name: &str,
        code: &str,
        email: &str,
        group_id: Option<Uuid>,
    ) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            "UPDATE students
             SET full_name = $1,
                 code = $2,
                 email = $3,
                 group_id = $4
             WHERE id = $5
             RETURNING id, full_name, code, email, group_id"
        )
        .bind(full_name)
        .bind(code)
        .bind(email)
        .bind(group_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(constraint_error)?;

        Ok(student)
    }

    /// Returns whether a row was deleted.
    pub async fn delete(&self, student_id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(student_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Turns constraint violations on writes into field errors.
fn constraint_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.is_unique_violation() && db_err.constraint() == Some(CODE_UNIQUE_CONSTRAINT) {
            return AppError::field("code", "student with this code already exists.");
        }
        if db_err.is_foreign_key_violation() {
            return AppError::field("group", "Invalid pk - object does not exist.");
        }
    }
    AppError::Database(err)
}
