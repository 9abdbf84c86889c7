use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        department::{CreateDepartmentRequest, DepartmentDto, UpdateDepartmentRequest},
    },
    server::{error::Error, model::app::AppState, service::department::DepartmentService},
};

pub static DEPARTMENT_TAG: &str = "department";

/// List all departments with related-record counts, in name order
#[utoipa::path(
    get,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    responses(
        (status = 200, description = "All departments with student, faculty, and course counts", body = ApiResponse<Vec<DepartmentDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let department_service = DepartmentService::new(&state.db);

    let departments = department_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(departments))))
}

/// Get a single department with related-record counts
#[utoipa::path(
    get,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department found", body = ApiResponse<DepartmentDto>),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let department_service = DepartmentService::new(&state.db);

    let department = department_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(department))))
}

/// Create a department
#[utoipa::path(
    post,
    path = "/api/departments",
    tag = DEPARTMENT_TAG,
    request_body = CreateDepartmentRequest,
    responses(
        (status = 201, description = "Department created", body = ApiResponse<DepartmentDto>),
        (status = 409, description = "Duplicate department code or name", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_department(
    State(state): State<AppState>,
    Json(request): Json<CreateDepartmentRequest>,
) -> Result<impl IntoResponse, Error> {
    let department_service = DepartmentService::new(&state.db);

    let department = department_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Department created successfully",
            department,
        )),
    ))
}

/// Update a department; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    request_body = UpdateDepartmentRequest,
    responses(
        (status = 200, description = "Department updated", body = ApiResponse<DepartmentDto>),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Duplicate department code or name", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateDepartmentRequest>,
) -> Result<impl IntoResponse, Error> {
    let department_service = DepartmentService::new(&state.db);

    let department = department_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Department updated successfully",
            department,
        )),
    ))
}

/// Delete a department with no remaining students, faculty, or courses
#[utoipa::path(
    delete,
    path = "/api/departments/{id}",
    tag = DEPARTMENT_TAG,
    params(("id" = i32, Path, description = "Department ID")),
    responses(
        (status = 200, description = "Department deleted"),
        (status = 404, description = "Department not found", body = ErrorDto),
        (status = 409, description = "Department still has dependent records", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let department_service = DepartmentService::new(&state.db);

    department_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Department deleted successfully")),
    ))
}
