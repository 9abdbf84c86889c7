use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use entity::user::{UserRole, UserStatus};

/// User profile as exposed by the API. The password hash never leaves the
/// database layer.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub status: UserStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            role: model.role,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Payload for POST /api/users
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,
    pub role: String,
    /// Defaults to active when omitted
    pub status: Option<String>,
}

/// Payload for PUT /api/users/{id}. Absent fields are left untouched; the
/// password is only re-hashed when a new one is supplied.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}
