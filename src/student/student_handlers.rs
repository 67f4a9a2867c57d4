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
    student_dto::{CreateStudentRequest, UpdateStudentRequest},
    student_models::{StudentResponse, STUDENT_LIST},
};

/// List students with their groups
#[utoipa::path(
    get,
    path = "/api/students",
    tag = "students",
    params(
        ("code" = Option<String>, Query, description = "Exact match on code"),
        ("email" = Option<String>, Query, description = "Exact match on email"),
        ("group" = Option<Uuid>, Query, description = "Filter by group ID"),
        ("search" = Option<String>, Query, description = "Search in full name, code and email"),
        ("ordering" = Option<String>, Query, description = "Comma separated: full_name, code, email, group; prefix with - for descending"),
        ("page" = Option<u32>, Query, description = "Page number")
    ),
    responses(
        (status = 200, description = "Students retrieved successfully", body = StudentPage),
        (status = 400, description = "Invalid filter value"),
        (status = 404, description = "Invalid page")
    )
)]
pub async fn list_students(
    State(state): State<AppState>,
    ListParams(params): ListParams,
    links: PageLinks,
) -> Result<Json<Page<StudentResponse>>> {
    let query = ListQuery::from_params(&STUDENT_LIST, &params)?;
    let page = PageRequest::from_params(&params, state.config.page_size)?;

    let (students, total) = state.student_service.list_students(&query, page).await?;

    Ok(Json(Page::new(students, total, page, &links)))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = "students",
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created successfully", body = StudentResponse),
        (status = 400, description = "Validation error, duplicate code or unknown group")
    )
)]
pub async fn create_student(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateStudentRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let student = state.student_service.create_student(payload).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Get a student by ID
#[utoipa::path(
    get,
    path = "/api/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved successfully", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<Uuid>,
) -> Result<Json<StudentResponse>> {
    let student = state.student_service.get_student(student_id).await?;
    Ok(Json(student))
}

/// Replace a student
#[utoipa::path(
    put,
    path = "/api/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = CreateStudentRequest,
    responses(
        (status = 200, description = "Student updated successfully", body = StudentResponse),
        (status = 400, description = "Validation error, duplicate code or unknown group"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn replace_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<Uuid>,
    AppJson(payload): AppJson<CreateStudentRequest>,
) -> Result<Json<StudentResponse>> {
    payload.validate()?;

    let student = state.student_service
        .update_student(student_id, payload.into())
        .await?;

    Ok(Json(student))
}

/// Partially update a student
#[utoipa::path(
    patch,
    path = "/api/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated successfully", body = StudentResponse),
        (status = 400, description = "Validation error, duplicate code or unknown group"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateStudentRequest>,
) -> Result<Json<StudentResponse>> {
    payload.validate()?;

    let student = state.student_service.update_student(student_id, payload).await?;

    Ok(Json(student))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{student_id}",
    tag = "students",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 204, description = "Student deleted successfully"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn delete_student(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<Uuid>,
) -> Result<impl IntoResponse> {
    state.student_service.delete_student(student_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Read-only student lookup by ID
#[utoipa::path(
    get,
    path = "/api/students/{student_id}/detail",
    tag = "students",
    params(
        ("student_id" = Uuid, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student retrieved successfully", body = StudentResponse),
        (status = 404, description = "Student not found")
    )
)]
pub async fn get_student_detail(
    State(state): State<AppState>,
    AppPath(student_id): AppPath<Uuid>,
) -> Result<Json<StudentResponse>> {
    let student = state.student_service.get_student_detail(student_id).await?;
    Ok(Json(student))
}
