use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::{academic_year::Semester, course::CourseStatus};

/// Fully validated course fields ready for persistence.
///
/// `department_id` is the already-resolved reference: department name
/// resolution happens in the service layer before one of these is built.
pub struct CourseWrite {
    pub course_code: String,
    pub course_name: String,
    pub description: Option<String>,
    pub credits: i32,
    pub department_id: Option<i32>,
    pub faculty_id: Option<i32>,
    pub semester: Option<Semester>,
    pub year_level: Option<i32>,
    pub status: CourseStatus,
}

pub struct CourseRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CourseRepository<'a, C> {
    /// Creates a new instance of [`CourseRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, write: CourseWrite) -> Result<entity::course::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let course = entity::course::ActiveModel {
            course_code: ActiveValue::Set(write.course_code),
            course_name: ActiveValue::Set(write.course_name),
            description: ActiveValue::Set(write.description),
            credits: ActiveValue::Set(write.credits),
            department_id: ActiveValue::Set(write.department_id),
            faculty_id: ActiveValue::Set(write.faculty_id),
            semester: ActiveValue::Set(write.semester),
            year_level: ActiveValue::Set(write.year_level),
            status: ActiveValue::Set(write.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        course.insert(self.db).await
    }

    pub async fn update(
        &self,
        model: entity::course::Model,
        write: CourseWrite,
    ) -> Result<entity::course::Model, DbErr> {
        let mut course: entity::course::ActiveModel = model.into();

        course.course_code = ActiveValue::Set(write.course_code);
        course.course_name = ActiveValue::Set(write.course_name);
        course.description = ActiveValue::Set(write.description);
        course.credits = ActiveValue::Set(write.credits);
        course.department_id = ActiveValue::Set(write.department_id);
        course.faculty_id = ActiveValue::Set(write.faculty_id);
        course.semester = ActiveValue::Set(write.semester);
        course.year_level = ActiveValue::Set(write.year_level);
        course.status = ActiveValue::Set(write.status);
        course.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        course.update(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::course::Model>, DbErr> {
        entity::prelude::Course::find_by_id(id).one(self.db).await
    }

    /// All courses, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::course::Model>, DbErr> {
        entity::prelude::Course::find()
            .order_by_desc(entity::course::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Whether a course other than `exclude_id` already uses this code
    pub async fn exists_by_code_excluding(
        &self,
        course_code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Course::find()
            .filter(entity::course::Column::CourseCode.eq(course_code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::course::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_by_department(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Course::find()
            .filter(entity::course::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }

    /// Deletes a course
    ///
    /// Returns OK regardless of the course existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Course::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Course::find().count(self.db).await
    }
}
