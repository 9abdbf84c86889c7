use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::student::{CreateStudentRequest, UpdateStudentRequest},
    server::{
        data::{
            department::DepartmentRepository,
            student::{StudentRepository, StudentWrite},
        },
        error::Error,
        service::validate,
    },
};

use entity::student::StudentStatus;

/// Service for student CRUD with business-key and email uniqueness.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    /// Creates a new instance of [`StudentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::student::Model>, Error> {
        let student_repo = StudentRepository::new(self.db);

        Ok(student_repo.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::student::Model, Error> {
        let student_repo = StudentRepository::new(self.db);

        student_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Student"))
    }

    pub async fn create(
        &self,
        request: CreateStudentRequest,
    ) -> Result<entity::student::Model, Error> {
        let mut errors = validate::check(&request);

        let status = match &request.status {
            Some(value) => validate::parse_enum::<StudentStatus>(&mut errors, "status", value)
                .unwrap_or(StudentStatus::Active),
            None => StudentStatus::Active,
        };

        let enrollment_date =
            validate::parse_date(&mut errors, "enrollment_date", &request.enrollment_date);
        let date_of_birth = request
            .date_of_birth
            .as_ref()
            .and_then(|value| validate::parse_date(&mut errors, "date_of_birth", value));

        if let Some(department_id) = request.department_id {
            let department_repo = DepartmentRepository::new(self.db);
            if department_repo.get_by_id(department_id).await?.is_none() {
                errors.add(
                    "department_id",
                    "department_id does not reference an existing department",
                );
            }
        }

        errors.into_result()?;

        let txn = self.db.begin().await?;

        let student_repo = StudentRepository::new(&txn);

        if student_repo
            .exists_by_student_id_excluding(&request.student_id, None)
            .await?
        {
            return Err(Error::conflict(
                "Student ID already exists. Please use a different ID.",
            ));
        }

        if student_repo
            .exists_by_email_excluding(&request.email, None)
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let student = student_repo
            .create(StudentWrite {
                student_id: request.student_id,
                full_name: request.full_name,
                email: request.email,
                phone: request.phone,
                department_id: request.department_id,
                year_level: request.year_level,
                status,
                // Validation above guarantees the date parsed
                enrollment_date: enrollment_date.expect("enrollment_date validated"),
                date_of_birth,
                address: request.address,
                guardian_name: request.guardian_name,
                guardian_phone: request.guardian_phone,
            })
            .await?;

        txn.commit().await?;

        Ok(student)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateStudentRequest,
    ) -> Result<entity::student::Model, Error> {
        let student_repo = StudentRepository::new(self.db);

        let existing = student_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Student"))?;

        let mut errors = validate::check(&request);

        let status = match &request.status {
            Some(value) => validate::parse_enum::<StudentStatus>(&mut errors, "status", value)
                .unwrap_or_else(|| existing.status.clone()),
            None => existing.status.clone(),
        };

        let enrollment_date = match &request.enrollment_date {
            Some(value) => validate::parse_date(&mut errors, "enrollment_date", value)
                .unwrap_or(existing.enrollment_date),
            None => existing.enrollment_date,
        };
        let date_of_birth = match &request.date_of_birth {
            Some(value) => validate::parse_date(&mut errors, "date_of_birth", value),
            None => existing.date_of_birth,
        };

        if let Some(department_id) = request.department_id {
            let department_repo = DepartmentRepository::new(self.db);
            if department_repo.get_by_id(department_id).await?.is_none() {
                errors.add(
                    "department_id",
                    "department_id does not reference an existing department",
                );
            }
        }

        errors.into_result()?;

        let write = StudentWrite {
            student_id: request
                .student_id
                .clone()
                .unwrap_or_else(|| existing.student_id.clone()),
            full_name: request
                .full_name
                .clone()
                .unwrap_or_else(|| existing.full_name.clone()),
            email: request.email.clone().unwrap_or_else(|| existing.email.clone()),
            phone: request.phone.clone().or_else(|| existing.phone.clone()),
            department_id: request.department_id.or(existing.department_id),
            year_level: request.year_level.unwrap_or(existing.year_level),
            status,
            enrollment_date,
            date_of_birth,
            address: request.address.clone().or_else(|| existing.address.clone()),
            guardian_name: request
                .guardian_name
                .clone()
                .or_else(|| existing.guardian_name.clone()),
            guardian_phone: request
                .guardian_phone
                .clone()
                .or_else(|| existing.guardian_phone.clone()),
        };

        let txn = self.db.begin().await?;

        let student_repo = StudentRepository::new(&txn);

        if student_repo
            .exists_by_student_id_excluding(&write.student_id, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Student ID already exists. Please use a different ID.",
            ));
        }

        if student_repo
            .exists_by_email_excluding(&write.email, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let student = student_repo.update(existing, write).await?;

        txn.commit().await?;

        Ok(student)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let student_repo = StudentRepository::new(self.db);

        let result = student_repo.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found("Student"));
        }

        Ok(())
    }
}
