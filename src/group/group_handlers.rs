use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::Result,
    extract::{AppJson, AppPath, ListParams},
    list_query::ListQuery,
    pagination::{Page, PageLinks, PageRequest},
    state::AppState,
};
use super::{
    group_dto::{CreateStudentGroupRequest, UpdateStudentGroupRequest},
    group_models::{StudentGroup, GROUP_LIST},
};

/// List student groups
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    params(
        ("name" = Option<String>, Query, description = "Exact match on name"),
        ("room_number" = Option<String>, Query, description = "Exact match on room number"),
        ("search" = Option<String>, Query, description = "Search in name and room number"),
        ("ordering" = Option<String>, Query, description = "Comma separated: name, created_at, updated_at; prefix with - for descending"),
        ("page" = Option<u32>, Query, description = "Page number")
    ),
    responses(
        (status = 200, description = "Groups retrieved successfully", body = StudentGroupPage),
        (status = 400, description = "Invalid filter value"),
        (status = 404, description = "Invalid page")
    )
)]
pub async fn list_groups(
    State(state): State<AppState>,
    ListParams(params): ListParams,
    links: PageLinks,
) -> Result<Json<Page<StudentGroup>>> {
    let query = ListQuery::from_params(&GROUP_LIST, &params)?;
    let page = PageRequest::from_params(&params, state.config.page_size)?;

    let (groups, total) = state.group_service.list_groups(&query, page).await?;

    Ok(Json(Page::new(groups, total, page, &links)))
}

/// Create a student group
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    request_body = CreateStudentGroupRequest,
    responses(
        (status = 201, description = "Group created successfully", body = StudentGroup),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_group(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentGroupRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let group = state.group_service.create_group(payload).await?;

    Ok((StatusCode::CREATED, Json(group)))
}

/// Get a student group by ID
#[utoipa::path(
    get,
    path = "/api/groups/{group_id}",
    tag = "groups",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 200, description = "Group retrieved successfully", body = StudentGroup),
        (status = 404, description = "Group not found")
    )
)]
pub async fn get_group(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<Uuid>,
) -> Result<Json<StudentGroup>> {
    let group = state.group_service.get_group(group_id).await?;
    Ok(Json(group))
}

/// Replace a student group
#[utoipa::path(
    put,
    path = "/api/groups/{group_id}",
    tag = "groups",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    request_body = CreateStudentGroupRequest,
    responses(
        (status = 200, description = "Group updated successfully", body = StudentGroup),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn replace_group(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<Uuid>,
    AppJson(payload): AppJson<CreateStudentGroupRequest>,
) -> Result<Json<StudentGroup>> {
    payload.validate()?;

    let group = state.group_service
        .update_group(group_id, payload.into())
        .await?;

    Ok(Json(group))
}

/// Partially update a student group
#[utoipa::path(
    patch,
    path = "/api/groups/{group_id}",
    tag = "groups",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    request_body = UpdateStudentGroupRequest,
    responses(
        (status = 200, description = "Group updated successfully", body = StudentGroup),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn update_group(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateStudentGroupRequest>,
) -> Result<Json<StudentGroup>> {
    payload.validate()?;

    let group = state.group_service.update_group(group_id, payload).await?;

    Ok(Json(group))
}

/// Delete a student group
#[utoipa::path(
    delete,
    path = "/api/groups/{group_id}",
    tag = "groups",
    params(
        ("group_id" = Uuid, Path, description = "Group ID")
    ),
    responses(
        (status = 204, description = "Group deleted successfully"),
        (status = 404, description = "Group not found")
    )
)]
pub async fn delete_group(
    State(state): State<AppState>,
    AppPath(group_id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    state.group_service.delete_group(group_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
