use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        faculty::{CreateFacultyRequest, UpdateFacultyRequest},
    },
    server::{error::Error, model::app::AppState, service::faculty::FacultyService},
};

pub static FACULTY_TAG: &str = "faculty";

/// List all faculty members, newest first
#[utoipa::path(
    get,
    path = "/api/faculty",
    tag = FACULTY_TAG,
    responses(
        (status = 200, description = "All faculty members", body = ApiResponse<Vec<entity::faculty::Model>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_faculty(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let faculty_service = FacultyService::new(&state.db);

    let faculty = faculty_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(faculty))))
}

/// Get a single faculty member
#[utoipa::path(
    get,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty member found", body = ApiResponse<entity::faculty::Model>),
        (status = 404, description = "Faculty member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let faculty_service = FacultyService::new(&state.db);

    let faculty = faculty_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(faculty))))
}

/// Create a faculty member
#[utoipa::path(
    post,
    path = "/api/faculty",
    tag = FACULTY_TAG,
    request_body = CreateFacultyRequest,
    responses(
        (status = 201, description = "Faculty member created", body = ApiResponse<entity::faculty::Model>),
        (status = 409, description = "Duplicate faculty ID or email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    Json(request): Json<CreateFacultyRequest>,
) -> Result<impl IntoResponse, Error> {
    let faculty_service = FacultyService::new(&state.db);

    let faculty = faculty_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Faculty member created successfully",
            faculty,
        )),
    ))
}

/// Update a faculty member; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty ID")),
    request_body = UpdateFacultyRequest,
    responses(
        (status = 200, description = "Faculty member updated", body = ApiResponse<entity::faculty::Model>),
        (status = 404, description = "Faculty member not found", body = ErrorDto),
        (status = 409, description = "Duplicate faculty ID or email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFacultyRequest>,
) -> Result<impl IntoResponse, Error> {
    let faculty_service = FacultyService::new(&state.db);

    let faculty = faculty_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Faculty member updated successfully",
            faculty,
        )),
    ))
}

/// Delete a faculty member
#[utoipa::path(
    delete,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty ID")),
    responses(
        (status = 200, description = "Faculty member deleted"),
        (status = 404, description = "Faculty member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let faculty_service = FacultyService::new(&state.db);

    faculty_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Faculty member deleted successfully")),
    ))
}
