use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use entity::department::DepartmentStatus;

/// Department with related-record counts for list and detail views
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct DepartmentDto {
    pub id: i32,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub head_faculty_id: Option<i32>,
    pub building: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: DepartmentStatus,
    pub students_count: u64,
    pub faculty_count: u64,
    pub courses_count: u64,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for POST /api/departments
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateDepartmentRequest {
    #[validate(length(min = 1, max = 50, message = "code must be between 1 and 50 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub head_faculty_id: Option<i32>,
    #[validate(length(max = 100, message = "building must be at most 100 characters"))]
    pub building: Option<String>,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(max = 20, message = "contact_phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,
    /// Defaults to active when omitted
    pub status: Option<String>,
}

/// Payload for PUT /api/departments/{id}. Absent fields are left untouched.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateDepartmentRequest {
    #[validate(length(min = 1, max = 50, message = "code must be between 1 and 50 characters"))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 255, message = "name must be between 1 and 255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    pub head_faculty_id: Option<i32>,
    #[validate(length(max = 100, message = "building must be at most 100 characters"))]
    pub building: Option<String>,
    #[validate(email(message = "contact_email must be a valid email address"))]
    pub contact_email: Option<String>,
    #[validate(length(max = 20, message = "contact_phone must be at most 20 characters"))]
    pub contact_phone: Option<String>,
    pub status: Option<String>,
}

impl DepartmentDto {
    pub fn from_model(
        model: entity::department::Model,
        students_count: u64,
        faculty_count: u64,
        courses_count: u64,
    ) -> Self {
        Self {
            id: model.id,
            code: model.code,
            name: model.name,
            description: model.description,
            head_faculty_id: model.head_faculty_id,
            building: model.building,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            status: model.status,
            students_count,
            faculty_count,
            courses_count,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
