use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use entity::{academic_year::Semester, course::CourseStatus};

/// Course flattened with its department and faculty display names
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub course_code: String,
    pub course_name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department_id: Option<i32>,
    /// Empty string when the course has no department, matching the list shape
    /// the front end renders directly into its table.
    pub department_name: String,
    pub faculty_id: Option<i32>,
    pub faculty_name: String,
    pub semester: Option<Semester>,
    pub year_level: Option<i32>,
    pub status: CourseStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Payload for POST /api/courses.
///
/// A department may be referenced by id, by name (resolved or created on the
/// fly), or not at all.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateCourseRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "course_code must be between 1 and 50 characters"
    ))]
    pub course_code: String,
    #[validate(length(
        min = 1,
        max = 255,
        message = "course_name must be between 1 and 255 characters"
    ))]
    pub course_name: String,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "credits must be 0 or greater"))]
    pub credits: Option<i32>,
    pub department_id: Option<i32>,
    #[validate(length(max = 255, message = "department_name must be at most 255 characters"))]
    pub department_name: Option<String>,
    pub faculty_id: Option<i32>,
    pub semester: Option<String>,
    pub year_level: Option<i32>,
    pub status: Option<String>,
}

/// Payload for PUT /api/courses/{id}. Absent fields are left untouched.
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct UpdateCourseRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "course_code must be between 1 and 50 characters"
    ))]
    pub course_code: Option<String>,
    #[validate(length(
        min = 1,
        max = 255,
        message = "course_name must be between 1 and 255 characters"
    ))]
    pub course_name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 0, message = "credits must be 0 or greater"))]
    pub credits: Option<i32>,
    pub department_id: Option<i32>,
    #[validate(length(max = 255, message = "department_name must be at most 255 characters"))]
    pub department_name: Option<String>,
    pub faculty_id: Option<i32>,
    pub semester: Option<String>,
    pub year_level: Option<i32>,
    pub status: Option<String>,
}

impl CourseDto {
    pub fn from_model(
        model: entity::course::Model,
        department_name: Option<String>,
        faculty_name: Option<String>,
    ) -> Self {
        Self {
            id: model.id,
            course_code: model.course_code,
            course_name: model.course_name,
            description: model.description,
            credits: model.credits,
            department_id: model.department_id,
            department_name: department_name.unwrap_or_default(),
            faculty_id: model.faculty_id,
            faculty_name: faculty_name.unwrap_or_default(),
            semester: model.semester,
            year_level: model.year_level,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
