use serde::Deserialize;
use validator::Validate;

/// Payload for POST /api/faculty
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateFacultyRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "faculty_id must be between 1 and 50 characters"
    ))]
    pub faculty_id: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "full_name must be between 1 and 255 characters"
    ))]
    pub full_name: String,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
    pub department_id: i32,
    #[validate(length(
        min = 1,
        max = 100,
        message = "position must be between 1 and 100 characters"
    ))]
    pub position: String,
    #[validate(length(max = 255, message = "specialization must be at most 255 characters"))]
    pub specialization: Option<String>,
    /// Defaults to full-time when omitted
    pub employment_type: Option<String>,
    /// Defaults to active when omitted
    pub status: Option<String>,
    /// ISO date, e.g. 2024-08-15
    pub hire_date: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 255, message = "emergency_contact must be at most 255 characters"))]
    pub emergency_contact: Option<String>,
    #[validate(length(max = 20, message = "emergency_phone must be at most 20 characters"))]
    pub emergency_phone: Option<String>,
    pub qualifications: Option<String>,
    #[validate(range(min = 0, message = "years_of_experience must be 0 or greater"))]
    pub years_of_experience: Option<i32>,
}

/// Payload for PUT /api/faculty/{id}. Absent fields are left untouched.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateFacultyRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "faculty_id must be between 1 and 50 characters"
    ))]
    pub faculty_id: Option<String>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "full_name must be between 1 and 255 characters"
    ))]
    pub full_name: Option<String>,
    #[validate(email(message = "email must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,
    pub department_id: Option<i32>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "position must be between 1 and 100 characters"
    ))]
    pub position: Option<String>,
    #[validate(length(max = 255, message = "specialization must be at most 255 characters"))]
    pub specialization: Option<String>,
    pub employment_type: Option<String>,
    pub status: Option<String>,
    pub hire_date: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 255, message = "emergency_contact must be at most 255 characters"))]
    pub emergency_contact: Option<String>,
    #[validate(length(max = 20, message = "emergency_phone must be at most 20 characters"))]
    pub emergency_phone: Option<String>,
    pub qualifications: Option<String>,
    #[validate(range(min = 0, message = "years_of_experience must be 0 or greater"))]
    pub years_of_experience: Option<i32>,
}
