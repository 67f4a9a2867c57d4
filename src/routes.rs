use crate::{
    group::{
        group_handlers,
        group_models::StudentGroup,
        group_dto::{CreateStudentGroupRequest, UpdateStudentGroupRequest},
    },
    pagination::{StudentGroupPage, StudentPage},
    state::AppState,
    student::{
        student_dto::{CreateStudentRequest, UpdateStudentRequest},
        student_handlers,
        student_models::StudentResponse,
    },
};
use axum::{routing::get, Router};
use axum::http::{header::{ACCEPT, CONTENT_TYPE}, Method};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::group::group_handlers::list_groups,
        crate::group::group_handlers::create_group,
        crate::group::group_handlers::get_group,
        crate::group::group_handlers::replace_group,
        crate::group::group_handlers::update_group,
        crate::group::group_handlers::delete_group,
        crate::student::student_handlers::list_students,
        crate::student::student_handlers::create_student,
        crate::student::student_handlers::get_student,
        crate::student::student_handlers::replace_student,
        crate::student::student_handlers::update_student,
        crate::student::student_handlers::delete_student,
        crate::student::student_handlers::get_student_detail,
    ),
    components(
        schemas(
            StudentGroup,
            CreateStudentGroupRequest,
            UpdateStudentGroupRequest,
            StudentGroupPage,
            StudentResponse,
            CreateStudentRequest,
            UpdateStudentRequest,
            StudentPage,
        )
    ),
    tags(
        (name = "groups", description = "Student group endpoints"),
        (name = "students", description = "Student endpoints")
    )
)]
pub struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(state.config.cors_allowed_origins.clone()))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, CONTENT_TYPE]);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api", resource_routes())
        // The browser frontend calls the resources without the prefix.
        .merge(resource_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Group and student routes, each also reachable with a trailing slash.
fn resource_routes() -> Router<AppState> {
    let groups = get(group_handlers::list_groups).post(group_handlers::create_group);
    let group = get(group_handlers::get_group)
        .put(group_handlers::replace_group)
        .patch(group_handlers::update_group)
        .delete(group_handlers::delete_group);

    let students = get(student_handlers::list_students).post(student_handlers::create_student);
    let student = get(student_handlers::get_student)
        .put(student_handlers::replace_student)
        .patch(student_handlers::update_student)
        .delete(student_handlers::delete_student);
    let student_detail = get(student_handlers::get_student_detail);

    Router::new()
        .route("/groups", groups.clone())
        .route("/groups/", groups)
        .route("/groups/:id", group.clone())
        .route("/groups/:id/", group)
        .route("/students", students.clone())
        .route("/students/", students)
        .route("/students/:id", student.clone())
        .route("/students/:id/", student)
        .route("/students/:id/detail", student_detail.clone())
        .route("/students/:id/detail/", student_detail)
}
