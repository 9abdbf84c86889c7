use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::faculty::{EmploymentType, FacultyStatus};

/// Fully validated faculty fields ready for persistence
pub struct FacultyWrite {
    pub faculty_id: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub department_id: i32,
    pub position: String,
    pub specialization: Option<String>,
    pub employment_type: EmploymentType,
    pub status: FacultyStatus,
    pub hire_date: NaiveDate,
    pub date_of_birth: Option<NaiveDate>,
    pub address: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
    pub qualifications: Option<String>,
    pub years_of_experience: Option<i32>,
}

pub struct FacultyRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FacultyRepository<'a, C> {
    /// Creates a new instance of [`FacultyRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, write: FacultyWrite) -> Result<entity::faculty::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let faculty = entity::faculty::ActiveModel {
            faculty_id: ActiveValue::Set(write.faculty_id),
            full_name: ActiveValue::Set(write.full_name),
            email: ActiveValue::Set(write.email),
            phone: ActiveValue::Set(write.phone),
            department_id: ActiveValue::Set(write.department_id),
            position: ActiveValue::Set(write.position),
            specialization: ActiveValue::Set(write.specialization),
            employment_type: ActiveValue::Set(write.employment_type),
            status: ActiveValue::Set(write.status),
            hire_date: ActiveValue::Set(write.hire_date),
            date_of_birth: ActiveValue::Set(write.date_of_birth),
            address: ActiveValue::Set(write.address),
            emergency_contact: ActiveValue::Set(write.emergency_contact),
            emergency_phone: ActiveValue::Set(write.emergency_phone),
            qualifications: ActiveValue::Set(write.qualifications),
            years_of_experience: ActiveValue::Set(write.years_of_experience),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        faculty.insert(self.db).await
    }

    pub async fn update(
        &self,
        model: entity::faculty::Model,
        write: FacultyWrite,
    ) -> Result<entity::faculty::Model, DbErr> {
        let mut faculty: entity::faculty::ActiveModel = model.into();

        faculty.faculty_id = ActiveValue::Set(write.faculty_id);
        faculty.full_name = ActiveValue::Set(write.full_name);
        faculty.email = ActiveValue::Set(write.email);
        faculty.phone = ActiveValue::Set(write.phone);
        faculty.department_id = ActiveValue::Set(write.department_id);
        faculty.position = ActiveValue::Set(write.position);
        faculty.specialization = ActiveValue::Set(write.specialization);
        faculty.employment_type = ActiveValue::Set(write.employment_type);
        faculty.status = ActiveValue::Set(write.status);
        faculty.hire_date = ActiveValue::Set(write.hire_date);
        faculty.date_of_birth = ActiveValue::Set(write.date_of_birth);
        faculty.address = ActiveValue::Set(write.address);
        faculty.emergency_contact = ActiveValue::Set(write.emergency_contact);
        faculty.emergency_phone = ActiveValue::Set(write.emergency_phone);
        faculty.qualifications = ActiveValue::Set(write.qualifications);
        faculty.years_of_experience = ActiveValue::Set(write.years_of_experience);
        faculty.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        faculty.update(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::faculty::Model>, DbErr> {
        entity::prelude::Faculty::find_by_id(id).one(self.db).await
    }

    /// Get faculty members for a set of IDs, used to batch-resolve display names
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::faculty::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Faculty::find()
            .filter(entity::faculty::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// All faculty members, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::faculty::Model>, DbErr> {
        entity::prelude::Faculty::find()
            .order_by_desc(entity::faculty::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Whether a record other than `exclude_id` already uses this business key
    pub async fn exists_by_faculty_id_excluding(
        &self,
        faculty_id: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Faculty::find()
            .filter(entity::faculty::Column::FacultyId.eq(faculty_id));

        if let Some(id) = exclude_id {
            query = query.filter(entity::faculty::Column::Id.ne(id));
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
            entity::prelude::Faculty::find().filter(entity::faculty::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::faculty::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_by_department(&self, department_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Faculty::find()
            .filter(entity::faculty::Column::DepartmentId.eq(department_id))
            .count(self.db)
            .await
    }

    /// Deletes a faculty member
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Faculty::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Faculty::find().count(self.db).await
    }
}
