use serde::Deserialize;
use validator::Validate;

/// Payload for POST /api/academic-years
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateAcademicYearRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "year_name must be between 1 and 50 characters"
    ))]
    pub year_name: String,
    /// ISO date, e.g. 2025-09-01
    pub start_date: String,
    /// ISO date; must be after start_date
    pub end_date: String,
    pub semester: String,
    /// Defaults to false when omitted
    pub is_current: Option<bool>,
    /// Defaults to active when omitted
    pub status: Option<String>,
}

/// Payload for PUT /api/academic-years/{id}. Absent fields are left untouched.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateAcademicYearRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "year_name must be between 1 and 50 characters"
    ))]
    pub year_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub semester: Option<String>,
    pub is_current: Option<bool>,
    pub status: Option<String>,
}
