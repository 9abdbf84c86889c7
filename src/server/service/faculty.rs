use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::faculty::{CreateFacultyRequest, UpdateFacultyRequest},
    server::{
        data::{
            department::DepartmentRepository,
            faculty::{FacultyRepository, FacultyWrite},
        },
        error::Error,
        service::validate,
    },
};

use entity::faculty::{EmploymentType, FacultyStatus};

/// Service for faculty CRUD with business-key and email uniqueness.
pub struct FacultyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FacultyService<'a> {
    /// Creates a new instance of [`FacultyService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::faculty::Model>, Error> {
        let faculty_repo = FacultyRepository::new(self.db);

        Ok(faculty_repo.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::faculty::Model, Error> {
        let faculty_repo = FacultyRepository::new(self.db);

        faculty_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Faculty member"))
    }

    pub async fn create(
        &self,
        request: CreateFacultyRequest,
    ) -> Result<entity::faculty::Model, Error> {
        let mut errors = validate::check(&request);

        let employment_type = match &request.employment_type {
            Some(value) => {
                validate::parse_enum::<EmploymentType>(&mut errors, "employment_type", value)
                    .unwrap_or(EmploymentType::FullTime)
            }
            None => EmploymentType::FullTime,
        };
        let status = match &request.status {
            Some(value) => validate::parse_enum::<FacultyStatus>(&mut errors, "status", value)
                .unwrap_or(FacultyStatus::Active),
            None => FacultyStatus::Active,
        };

        let hire_date = validate::parse_date(&mut errors, "hire_date", &request.hire_date);
        let date_of_birth = request
            .date_of_birth
            .as_ref()
            .and_then(|value| validate::parse_date(&mut errors, "date_of_birth", value));

        let department_repo = DepartmentRepository::new(self.db);
        if department_repo.get_by_id(request.department_id).await?.is_none() {
            errors.add(
                "department_id",
                "department_id does not reference an existing department",
            );
        }

        errors.into_result()?;

        let txn = self.db.begin().await?;

        let faculty_repo = FacultyRepository::new(&txn);

        if faculty_repo
            .exists_by_faculty_id_excluding(&request.faculty_id, None)
            .await?
        {
            return Err(Error::conflict(
                "Faculty ID already exists. Please use a different ID.",
            ));
        }

        if faculty_repo
            .exists_by_email_excluding(&request.email, None)
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let faculty = faculty_repo
            .create(FacultyWrite {
                faculty_id: request.faculty_id,
                full_name: request.full_name,
                email: request.email,
                phone: request.phone,
                department_id: request.department_id,
                position: request.position,
                specialization: request.specialization,
                employment_type,
                status,
                // Validation above guarantees the date parsed
                hire_date: hire_date.expect("hire_date validated"),
                date_of_birth,
                address: request.address,
                emergency_contact: request.emergency_contact,
                emergency_phone: request.emergency_phone,
                qualifications: request.qualifications,
                years_of_experience: request.years_of_experience,
            })
            .await?;

        txn.commit().await?;

        Ok(faculty)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateFacultyRequest,
    ) -> Result<entity::faculty::Model, Error> {
        let faculty_repo = FacultyRepository::new(self.db);

        let existing = faculty_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Faculty member"))?;

        let mut errors = validate::check(&request);

        let employment_type = match &request.employment_type {
            Some(value) => {
                validate::parse_enum::<EmploymentType>(&mut errors, "employment_type", value)
                    .unwrap_or_else(|| existing.employment_type.clone())
            }
            None => existing.employment_type.clone(),
        };
        let status = match &request.status {
            Some(value) => validate::parse_enum::<FacultyStatus>(&mut errors, "status", value)
                .unwrap_or_else(|| existing.status.clone()),
            None => existing.status.clone(),
        };

        let hire_date = match &request.hire_date {
            Some(value) => {
                validate::parse_date(&mut errors, "hire_date", value).unwrap_or(existing.hire_date)
            }
            None => existing.hire_date,
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

        let write = FacultyWrite {
            faculty_id: request
                .faculty_id
                .clone()
                .unwrap_or_else(|| existing.faculty_id.clone()),
            full_name: request
                .full_name
                .clone()
                .unwrap_or_else(|| existing.full_name.clone()),
            email: request.email.clone().unwrap_or_else(|| existing.email.clone()),
            phone: request.phone.clone().or_else(|| existing.phone.clone()),
            department_id: request.department_id.unwrap_or(existing.department_id),
            position: request
                .position
                .clone()
                .unwrap_or_else(|| existing.position.clone()),
            specialization: request
                .specialization
                .clone()
                .or_else(|| existing.specialization.clone()),
            employment_type,
            status,
            hire_date,
            date_of_birth,
            address: request.address.clone().or_else(|| existing.address.clone()),
            emergency_contact: request
                .emergency_contact
                .clone()
                .or_else(|| existing.emergency_contact.clone()),
            emergency_phone: request
                .emergency_phone
                .clone()
                .or_else(|| existing.emergency_phone.clone()),
            qualifications: request
                .qualifications
                .clone()
                .or_else(|| existing.qualifications.clone()),
            years_of_experience: request
                .years_of_experience
                .or(existing.years_of_experience),
        };

        let txn = self.db.begin().await?;

        let faculty_repo = FacultyRepository::new(&txn);

        if faculty_repo
            .exists_by_faculty_id_excluding(&write.faculty_id, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Faculty ID already exists. Please use a different ID.",
            ));
        }

        if faculty_repo
            .exists_by_email_excluding(&write.email, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let faculty = faculty_repo.update(existing, write).await?;

        txn.commit().await?;

        Ok(faculty)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let faculty_repo = FacultyRepository::new(self.db);

        let result = faculty_repo.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found("Faculty member"));
        }

        Ok(())
    }
}
