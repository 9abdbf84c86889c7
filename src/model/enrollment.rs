use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use entity::enrollment::EnrollmentStatus;

/// Enrollment flattened with the student's display fields for course rosters
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct EnrollmentDto {
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub student_number: String,
    pub student_name: String,
    pub grade: Option<String>,
    pub status: EnrollmentStatus,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl EnrollmentDto {
    pub fn from_model(
        model: entity::enrollment::Model,
        student: &entity::student::Model,
    ) -> Self {
        Self {
            id: model.id,
            student_id: model.student_id,
            course_id: model.course_id,
            student_number: student.student_id.clone(),
            student_name: student.full_name.clone(),
            grade: model.grade,
            status: model.status,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Payload for POST /api/courses/{id}/enrollments
#[derive(Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateEnrollmentRequest {
    pub student_id: i32,
    #[validate(length(max = 10, message = "grade must be at most 10 characters"))]
    pub grade: Option<String>,
    /// Defaults to enrolled when omitted
    pub status: Option<String>,
}
