use serde::Deserialize;
use validator::Validate;

/// Payload for POST /api/students
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateStudentRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "student_id must be between 1 and 50 characters"
    ))]
    pub student_id: String,
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
    pub department_id: Option<i32>,
    #[validate(range(min = 1, max = 4, message = "year_level must be between 1 and 4"))]
    pub year_level: i32,
    /// Defaults to active when omitted
    pub status: Option<String>,
    /// ISO date, e.g. 2024-08-15
    pub enrollment_date: String,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 255, message = "guardian_name must be at most 255 characters"))]
    pub guardian_name: Option<String>,
    #[validate(length(max = 20, message = "guardian_phone must be at most 20 characters"))]
    pub guardian_phone: Option<String>,
}

/// Payload for PUT /api/students/{id}. Absent fields are left untouched.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateStudentRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "student_id must be between 1 and 50 characters"
    ))]
    pub student_id: Option<String>,
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
    #[validate(range(min = 1, max = 4, message = "year_level must be between 1 and 4"))]
    pub year_level: Option<i32>,
    pub status: Option<String>,
    pub enrollment_date: Option<String>,
    pub date_of_birth: Option<String>,
    pub address: Option<String>,
    #[validate(length(max = 255, message = "guardian_name must be at most 255 characters"))]
    pub guardian_name: Option<String>,
    #[validate(length(max = 20, message = "guardian_phone must be at most 20 characters"))]
    pub guardian_phone: Option<String>,
}
