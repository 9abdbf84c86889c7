use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::enrollment::EnrollmentStatus;

pub struct EnrollmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EnrollmentRepository<'a, C> {
    /// Creates a new instance of [`EnrollmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        course_id: i32,
        student_id: i32,
        grade: Option<String>,
        status: EnrollmentStatus,
    ) -> Result<entity::enrollment::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let enrollment = entity::enrollment::ActiveModel {
            course_id: ActiveValue::Set(course_id),
            student_id: ActiveValue::Set(student_id),
            grade: ActiveValue::Set(grade),
            status: ActiveValue::Set(status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        enrollment.insert(self.db).await
    }

    /// Roster rows for a course paired with each student record
    pub async fn find_by_course_with_students(
        &self,
        course_id: i32,
    ) -> Result<Vec<(entity::enrollment::Model, Option<entity::student::Model>)>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .find_also_related(entity::prelude::Student)
            .order_by_asc(entity::enrollment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn count_by_course(&self, course_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .count(self.db)
            .await
    }

    /// Whether the student already has an enrollment row for this course
    pub async fn exists_pair(&self, course_id: i32, student_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes the enrollment pairing a student with a course
    ///
    /// Returns OK regardless of the pair existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete_pair(
        &self,
        course_id: i32,
        student_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::Enrollment::delete_many()
            .filter(entity::enrollment::Column::CourseId.eq(course_id))
            .filter(entity::enrollment::Column::StudentId.eq(student_id))
            .exec(self.db)
            .await
    }
}
