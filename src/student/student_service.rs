use crate::error::{AppError, Result};
use crate::group::group_repository::GroupRepository;
use crate::list_query::ListQuery;
use crate::pagination::PageRequest;
use uuid::Uuid;
use super::student_dto::{CreateStudentRequest, UpdateStudentRequest};
use super::student_models::StudentResponse;
use super::student_repository::StudentRepository;

/// Service layer for student reads and writes.
#[derive(Clone)]
pub struct StudentService {
    repo: StudentRepository,
    group_repo: GroupRepository,
}

impl StudentService {
    pub fn new(repo: StudentRepository, group_repo: GroupRepository) -> Self {
        Self { repo, group_repo }
    }

    pub async fn list_students(&self, query: &ListQuery, page: PageRequest) -> Result<(Vec<StudentResponse>, i64)> {
        let (rows, total) = self.repo.find_all(query, &page).await?;
        page.ensure_in_range(total)?;

        tracing::debug!(total, page = page.page, "listed students");
        Ok((rows.into_iter().map(StudentResponse::from).collect(), total))
    }

    /// Student with its group, read in a single joined query.
    pub async fn get_student(&self, student_id: Uuid) -> Result<StudentResponse> {
        self.repo
            .find_with_group(student_id)
            .await?
            .map(StudentResponse::from)
            .ok_or_else(AppError::not_found)
    }

    /// Student looked up on its own; the group, if any, is a second read.
    pub async fn get_student_detail(&self, student_id: Uuid) -> Result<StudentResponse> {
        let student = self.repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(AppError::not_found)?;

        let group = match student.group_id {
            Some(group_id) => self.group_repo.find_by_id(group_id).await?,
            None => None,
        };

        Ok(StudentResponse::from_parts(student, group))
    }

    pub async fn create_student(&self, payload: CreateStudentRequest) -> Result<StudentResponse> {
        let student = self.repo
            .create(
                &payload.full_name,
                &payload.code,
                &payload.email,
                payload.group.flatten(),
            )
            .await?;

        tracing::info!(student_id = %student.id, code = %student.code, "student created");

        self.get_student(student.id).await
    }

    /// Applies the fields present in `payload` on top of the stored student.
    pub async fn update_student(&self, student_id: Uuid, payload: UpdateStudentRequest) -> Result<StudentResponse> {
        let current = self.repo
            .find_by_id(student_id)
            .await?
            .ok_or_else(AppError::not_found)?;

        let full_name = payload.full_name.unwrap_or(current.full_name);
        let code = payload.code.unwrap_or(current.code);
        let email = payload.email.unwrap_or(current.email);
        let group_id = payload.group.unwrap_or(current.group_id);

        self.repo
            .update(student_id, &full_name, &code, &email, group_id)
            .await?
            .ok_or_else(AppError::not_found)?;

        tracing::info!(%student_id, "student updated");

        self.get_student(student_id).await
    }

    pub async fn delete_student(&self, student_id: Uuid) -> Result<()> {
        if !self.repo.delete(student_id).await? {
            return Err(AppError::not_found());
        }

        tracing::info!(%student_id, "student deleted");
        Ok(())
    }
}
