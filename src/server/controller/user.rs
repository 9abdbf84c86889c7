use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        user::{CreateUserRequest, UpdateUserRequest, UserDto},
    },
    server::{error::Error, model::app::AppState, service::user::UserService},
};

pub static USER_TAG: &str = "user";

/// List all user accounts, newest first
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = ApiResponse<Vec<UserDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let users = user_service.list().await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(users))))
}

/// Get a single user account
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User found", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.get(id).await?;

    Ok((StatusCode::OK, Json(ApiResponse::data(user))))
}

/// Create a user account; the password is hashed before storage
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 409, description = "Duplicate email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message("User created successfully", user)),
    ))
}

/// Update a user account; the password is only re-hashed when supplied
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Duplicate email", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    let user = user_service.update(id, request).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("User updated successfully", user)),
    ))
}

/// Delete a user account unless it is the last remaining admin
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Cannot delete the last admin user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_service = UserService::new(&state.db);

    user_service.delete(id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("User deleted successfully")),
    ))
}
