use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        student::{CreateStudentRequest, UpdateStudentRequest},
    },
    server::{error::Error, model::app::AppState, service::student::StudentService},
};

pub static STUDENT_TAG: &str = "student";

/// List all students, newest first
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "All students", body = ApiResponse<Vec<entity::student::Model>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db);

    let students = student_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(students))))
}

/// Get a single student
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student found", body = ApiResponse<entity::student::Model>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db);

    let student = student_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(student))))
}

/// Create a student
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentRequest,
    responses(
        (status = 201, description = "Student created", body = ApiResponse<entity::student::Model>),
        (status = 409, description = "Duplicate student ID or email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    Json(request): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db);

    let student = student_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("Student created successfully", student)),
    ))
}

/// Update a student; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    request_body = UpdateStudentRequest,
    responses(
        (status = 200, description = "Student updated", body = ApiResponse<entity::student::Model>),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 409, description = "Duplicate student ID or email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateStudentRequest>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db);

    let student = student_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Student updated successfully", student)),
    ))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(("id" = i32, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let student_service = StudentService::new(&state.db);

    student_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Student deleted successfully")),
    ))
}
