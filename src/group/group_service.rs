use crate::error::{AppError, Result};
use crate::list_query::ListQuery;
use crate::pagination::PageRequest;
use uuid::Uuid;
use super::group_dto::{CreateStudentGroupRequest, UpdateStudentGroupRequest};
use super::group_models::StudentGroup;
use super::group_repository::GroupRepository;

#[derive(Clone)]
pub struct GroupService {
    repo: GroupRepository,
}

impl GroupService {
    pub fn new(repo: GroupRepository) -> Self {
        Self { repo }
    }

    pub async fn list_groups(&self, query: &ListQuery, page: PageRequest) -> Result<(Vec<StudentGroup>, i64)> {
        let (groups, total) = self.repo.find_all(query, &page).await?;
        page.ensure_in_range(total)?;

        tracing::debug!(total, page = page.page, "listed student groups");
        Ok((groups, total))
    }

    pub async fn get_group(&self, group_id: Uuid) -> Result<StudentGroup> {
        self.repo
            .find_by_id(group_id)
            .await?
            .ok_or_else(AppError::not_found)
    }

    pub async fn create_group(&self, payload: CreateStudentGroupRequest) -> Result<StudentGroup> {
        let group = self.repo.create(&payload.name, &payload.room_number).await?;

        tracing::info!(group_id = %group.id, name = %group.name, "student group created");
        Ok(group)
    }

    pub async fn update_group(&self, group_id: Uuid, payload: UpdateStudentGroupRequest) -> Result<StudentGroup> {
        let group = self.repo
            .update(group_id, payload.name.as_deref(), payload.room_number.as_deref())
            .await?
            .ok_or_else(AppError::not_found)?;

        tracing::info!(group_id = %group.id, "student group updated");
        Ok(group)
    }

    /// Students of the deleted group are detached, not removed.
    pub async fn delete_group(&self, group_id: Uuid) -> Result<()> {
        if !self.repo.delete(group_id).await? {
            return Err(AppError::not_found());
        }

        tracing::info!(%group_id, "student group deleted");
        Ok(())
    }
}
