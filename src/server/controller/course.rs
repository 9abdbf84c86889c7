use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        course::{CourseDto, CreateCourseRequest, UpdateCourseRequest},
    },
    server::{error::Error, model::app::AppState, service::course::CourseService},
};

pub static COURSE_TAG: &str = "course";

/// List all courses newest first, with department and faculty names
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses with display names", body = ApiResponse<Vec<CourseDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let courses = course_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(courses))))
}

/// Get a single course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course found", body = ApiResponse<CourseDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let course = course_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(course))))
}

/// Create a course, resolving its department by id or by name
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = ApiResponse<CourseDto>),
        (status = 409, description = "Duplicate course code", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    Json(request): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let course = course_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Course created successfully", course)),
    ))
}

/// Update a course; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = ApiResponse<CourseDto>),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Duplicate course code", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCourseRequest>,
) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let course = course_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Course updated successfully", course)),
    ))
}

/// Delete a course with no enrolled students
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course ID")),
    responses(
        (status = 200, description = "Course deleted"),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 409, description = "Course still has enrolled students", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let course_service = CourseService::new(&state.db);

    let name = course_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message(format!(
            "Course '{}' deleted successfully",
            name
        ))),
    ))
}
