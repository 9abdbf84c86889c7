use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::student::StudentStatus;

/// Fully validated student fields ready for persistence
pub struct StudentWrite {
    pub student_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: Option<i32>,
    pub year_level: i32,
    pub status: StudentStatus,
    pub enrollment_date: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    /// Creates a new instance of [`StudentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, write: StudentWrite) -> Result<entity::student::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let student = entity::student::ActiveModel {
            student_id: ActiveValue::Set(write.student_id),
            full_name: ActiveValue::Set(write.full_name),
            email: ActiveValue::Set(write.email),
            phone: ActiveValue::Set(write.phone),
            department_id: ActiveValue::Set(write.department_id),
            year_level: ActiveValue::Set(write.year_level),
            status: ActiveValue::Set(write.status),
            enrollment_date: ActiveValue::Set(write.enrollment_date),
            date_of_birth: ActiveValue::Set(write.date_of_birth),
            address: ActiveValue::Set(write.address),
            guardian_name: ActiveValue::Set(write.guardian_name),
            guardian_phone: ActiveValue::Set(write.guardian_phone),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        student.insert(self.db).await
    }

    pub async fn update(
        &self,
        model: entity::student::Model,
        write: StudentWrite,
    ) -> Result<entity::student::Model, DbErr> {
        let mut student: entity::student::ActiveModel = model.into();

        student.student_id = ActiveValue::Set(write.student_id);
        student.full_name = ActiveValue::Set(write.full_name);
        student.email = ActiveValue::Set(write.email);
        student.phone = ActiveValue::Set(write.phone);
        student.department_id = ActiveValue::Set(write.department_id);
        student.year_level = ActiveValue::Set(write.year_level);
        student.status = ActiveValue::Set(write.status);
        student.enrollment_date = ActiveValue::Set(write.enrollment_date);
        student.date_of_birth = ActiveValue::Set(write.date_of_birth);
        student.address = ActiveValue::Set(write.address);
        student.guardian_name = ActiveValue::Set(write.guardian_name);
        student.guardian_phone = ActiveValue::Set(write.guardian_phone);
        student.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        student.update(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(id).one(self.db).await
    }

    /// All students, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_desc(entity::student::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Whether a record other than `exclude_id` already uses this business key
    pub async fn exists_by_student_id_excluding(
        &self,
        student_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Student::find()
            .filter(entity::student::Column::StudentId.eq(student_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Whether a record other than `exclude_id` already uses this email
    pub async fn exists_by_email_excluding(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Student::find().filter(entity::student::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::student::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_by_department(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Student::find()
            .filter(entity::student::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }

    /// Deletes a student
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Student::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }
}
