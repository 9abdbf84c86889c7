use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        academic_year::{CreateAcademicYearRequest, UpdateAcademicYearRequest},
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
    },
    server::{error::Error, model::app::AppState, service::academic_year::AcademicYearService},
};

pub static ACADEMIC_YEAR_TAG: &str = "academic-year";

/// List all academic years, most recent first
#[utoipa::path(
    get,
    path = "/api/academic-years",
    tag = ACADEMIC_YEAR_TAG,
    responses(
        (status = 200, description = "All academic years", body = ApiResponse<Vec<entity::academic_year::Model>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_academic_years(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let academic_year_service = AcademicYearService::new(&state.db);

    let academic_years = academic_year_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(academic_years))))
}

/// Get a single academic year
#[utoipa::path(
    get,
    path = "/api/academic-years/{id}",
    tag = ACADEMIC_YEAR_TAG,
    params(("id" = i32, Path, description = "Academic year ID")),
    responses(
        (status = 200, description = "Academic year found", body = ApiResponse<entity::academic_year::Model>),
        (status = 404, description = "Academic year not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_academic_year(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let academic_year_service = AcademicYearService::new(&state.db);

    let academic_year = academic_year_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(academic_year))))
}

/// Create an academic year; marking it current unsets every other year
#[utoipa::path(
    post,
    path = "/api/academic-years",
    tag = ACADEMIC_YEAR_TAG,
    request_body = CreateAcademicYearRequest,
    responses(
        (status = 201, description = "Academic year created", body = ApiResponse<entity::academic_year::Model>),
        (status = 409, description = "Duplicate year name", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_academic_year(
    State(state): State<AppState>,
    Json(request): Json<CreateAcademicYearRequest>,
) -> Result<impl IntoResponse, Error> {
    let academic_year_service = AcademicYearService::new(&state.db);

    let academic_year = academic_year_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "Academic year created successfully",
            academic_year,
        )),
    ))
}

/// Update an academic year; absent fields are left untouched
#[utoipa::path(
    put,
    path = "/api/academic-years/{id}",
    tag = ACADEMIC_YEAR_TAG,
    params(("id" = i32, Path, description = "Academic year ID")),
    request_body = UpdateAcademicYearRequest,
    responses(
        (status = 200, description = "Academic year updated", body = ApiResponse<entity::academic_year::Model>),
        (status = 404, description = "Academic year not found", body = ErrorDto),
        (status = 409, description = "Duplicate year name", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_academic_year(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAcademicYearRequest>,
) -> Result<impl IntoResponse, Error> {
    let academic_year_service = AcademicYearService::new(&state.db);

    let academic_year = academic_year_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message(
            "Academic year updated successfully",
            academic_year,
        )),
    ))
}

/// Delete an academic year
#[utoipa::path(
    delete,
    path = "/api/academic-years/{id}",
    tag = ACADEMIC_YEAR_TAG,
    params(("id" = i32, Path, description = "Academic year ID")),
    responses(
        (status = 200, description = "Academic year deleted"),
        (status = 404, description = "Academic year not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_academic_year(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let academic_year_service = AcademicYearService::new(&state.db);

    academic_year_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Academic year deleted successfully")),
    ))
}
