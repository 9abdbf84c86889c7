use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, ValidationErrorDto},
        auth::LoginRequest,
        user::UserDto,
    },
    server::{
        error::{auth::AuthError, Error},
        model::{app::AppState, session::user::SessionUserId},
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

/// Login with email and password
///
/// Verifies credentials against stored user accounts and stores the user ID in
/// the caller's session on success.
#[utoipa::path(
    post,
    path = "/api/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in, session established", body = ApiResponse<UserDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 422, description = "Validation failed", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let auth_service = AuthService::new(&state.db);

    let user = auth_service.login(request).await?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_message("Logged in successfully", user)),
    ))
}

/// Logout by discarding the caller's session
#[utoipa::path(
    post,
    path = "/api/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.flush().await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::message("Logged out successfully")),
    ))
}

/// Get the profile of the currently logged in user
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user profile", body = ApiResponse<UserDto>),
        (status = 404, description = "No logged in user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_session_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let Some(user_id) = SessionUserId::get(&session).await? else {
        return Err(AuthError::UserNotInSession.into());
    };

    let user_service = UserService::new(&state.db);

    let user = match user_service.get(user_id).await {
        Ok(user) => user,
        Err(Error::NotFound { .. }) => {
            // Stale session pointing at a deleted account; clear it so the
            // client re-authenticates.
            session.flush().await?;

            tracing::warn!(
                "Failed to find user ID {} in database despite having an active session; \
                cleared session for user, they will need to relog to fix",
                user_id
            );

            return Err(AuthError::UserNotInDatabase(user_id).into());
        }
        Err(err) => return Err(err),
    };

    Ok((StatusCode::OK, Json(ApiResponse::data(user))))
}
