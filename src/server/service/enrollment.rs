use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::enrollment::{CreateEnrollmentRequest, EnrollmentDto},
    server::{
        data::{
            course::CourseRepository, enrollment::EnrollmentRepository,
            student::StudentRepository,
        },
        error::Error,
        service::validate,
    },
};

use entity::enrollment::EnrollmentStatus;

/// Service for course rosters: enrolling, listing, and dropping students.
pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    /// Creates a new instance of [`EnrollmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Roster for a course, flattened with each student's display fields
    pub async fn list_for_course(&self, course_id: i32) -> Result<Vec<EnrollmentDto>, Error> {
        let course_repo = CourseRepository::new(self.db);

        if course_repo.get_by_id(course_id).await?.is_none() {
            return Err(Error::not_found("Course"));
        }

        let rows = EnrollmentRepository::new(self.db)
            .find_by_course_with_students(course_id)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(enrollment, student)| {
                student.map(|s| EnrollmentDto::from_model(enrollment, &s))
            })
            .collect())
    }

    /// Enroll a student in a course, one row per (student, course) pair
    pub async fn enroll(
        &self,
        course_id: i32,
        request: CreateEnrollmentRequest,
    ) -> Result<EnrollmentDto, Error> {
        let mut errors = validate::check(&request);

        let status = match &request.status {
            Some(value) => validate::parse_enum::<EnrollmentStatus>(&mut errors, "status", value)
                .unwrap_or(EnrollmentStatus::Enrolled),
            None => EnrollmentStatus::Enrolled,
        };

        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);

        if course_repo.get_by_id(course_id).await?.is_none() {
            return Err(Error::not_found("Course"));
        }

        let student = StudentRepository::new(&txn).get_by_id(request.student_id).await?;
        let Some(student) = student else {
            errors.add(
                "student_id",
                "student_id does not reference an existing student",
            );
            return Err(errors.into());
        };

        errors.into_result()?;

        let enrollment_repo = EnrollmentRepository::new(&txn);

        if enrollment_repo.exists_pair(course_id, student.id).await? {
            return Err(Error::conflict("Student is already enrolled in this course."));
        }

        let enrollment = enrollment_repo
            .create(course_id, student.id, request.grade, status)
            .await?;

        txn.commit().await?;

        Ok(EnrollmentDto::from_model(enrollment, &student))
    }

    /// Drop a student from a course
    pub async fn drop(&self, course_id: i32, student_id: i32) -> Result<(), Error> {
        let enrollment_repo = EnrollmentRepository::new(self.db);

        let result = enrollment_repo.delete_pair(course_id, student_id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found("Enrollment"));
        }

        Ok(())
    }
}
