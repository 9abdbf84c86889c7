use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::department::{CreateDepartmentRequest, DepartmentDto, UpdateDepartmentRequest},
    server::{
        data::{
            course::CourseRepository,
            department::{DepartmentRepository, DepartmentWrite},
            faculty::FacultyRepository,
            student::StudentRepository,
        },
        error::Error,
        service::validate,
    },
};

use entity::department::DepartmentStatus;

/// Service for department CRUD and the dependent-records deletion guard.
pub struct DepartmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepartmentService<'a> {
    /// Creates a new instance of [`DepartmentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All departments in name order, each with its related-record counts
    pub async fn list(&self) -> Result<Vec<DepartmentDto>, Error> {
        let department_repo = DepartmentRepository::new(self.db);

        let departments = department_repo.find_all().await?;

        let mut dtos = Vec::with_capacity(departments.len());
        for department in departments {
            dtos.push(self.compose_dto(department).await?);
        }

        Ok(dtos)
    }

    pub async fn get(&self, id: i32) -> Result<DepartmentDto, Error> {
        let department_repo = DepartmentRepository::new(self.db);

        let department = department_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Department"))?;

        self.compose_dto(department).await
    }

    pub async fn create(&self, request: CreateDepartmentRequest) -> Result<DepartmentDto, Error> {
        let mut errors = validate::check(&request);

        let status = match &request.status {
            Some(value) => validate::parse_enum::<DepartmentStatus>(&mut errors, "status", value)
                .unwrap_or(DepartmentStatus::Active),
            None => DepartmentStatus::Active,
        };

        if let Some(head_faculty_id) = request.head_faculty_id {
            let faculty_repo = FacultyRepository::new(self.db);
            if faculty_repo.get_by_id(head_faculty_id).await?.is_none() {
                errors.add(
                    "head_faculty_id",
                    "head_faculty_id does not reference an existing faculty member",
                );
            }
        }

        errors.into_result()?;

        let txn = self.db.begin().await?;

        let department_repo = DepartmentRepository::new(&txn);

        if department_repo
            .exists_by_code_excluding(&request.code, None)
            .await?
        {
            return Err(Error::conflict(
                "Department code already exists. Please use a different code.",
            ));
        }

        if department_repo
            .exists_by_name_excluding(&request.name, None)
            .await?
        {
            return Err(Error::conflict(
                "Department name already exists. Please use a different name.",
            ));
        }

        let department = department_repo
            .create(DepartmentWrite {
                code: Some(request.code),
                name: request.name.trim().to_string(),
                description: request.description,
                head_faculty_id: request.head_faculty_id,
                building: request.building,
                contact_email: request.contact_email,
                contact_phone: request.contact_phone,
                status,
            })
            .await?;

        txn.commit().await?;

        Ok(DepartmentDto::from_model(department, 0, 0, 0))
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateDepartmentRequest,
    ) -> Result<DepartmentDto, Error> {
        let department_repo = DepartmentRepository::new(self.db);

        let existing = department_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Department"))?;

        let mut errors = validate::check(&request);

        let status = match &request.status {
            Some(value) => validate::parse_enum::<DepartmentStatus>(&mut errors, "status", value)
                .unwrap_or_else(|| existing.status.clone()),
            None => existing.status.clone(),
        };

        if let Some(head_faculty_id) = request.head_faculty_id {
            let faculty_repo = FacultyRepository::new(self.db);
            if faculty_repo.get_by_id(head_faculty_id).await?.is_none() {
                errors.add(
                    "head_faculty_id",
                    "head_faculty_id does not reference an existing faculty member",
                );
            }
        }

        errors.into_result()?;

        let write = DepartmentWrite {
            code: request.code.clone().or_else(|| existing.code.clone()),
            name: request
                .name
                .as_deref()
                .map(str::trim)
                .map(str::to_string)
                .unwrap_or_else(|| existing.name.clone()),
            description: request.description.clone().or_else(|| existing.description.clone()),
            head_faculty_id: request.head_faculty_id.or(existing.head_faculty_id),
            building: request.building.clone().or_else(|| existing.building.clone()),
            contact_email: request
                .contact_email
                .clone()
                .or_else(|| existing.contact_email.clone()),
            contact_phone: request
                .contact_phone
                .clone()
                .or_else(|| existing.contact_phone.clone()),
            status,
        };

        let txn = self.db.begin().await?;

        let department_repo = DepartmentRepository::new(&txn);

        if let Some(code) = &write.code {
            if department_repo.exists_by_code_excluding(code, Some(id)).await? {
                return Err(Error::conflict(
                    "Department code already exists. Please use a different code.",
                ));
            }
        }

        if department_repo
            .exists_by_name_excluding(&write.name, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Department name already exists. Please use a different name.",
            ));
        }

        let department = department_repo.update(existing, write).await?;

        txn.commit().await?;

        self.compose_dto(department).await
    }

    /// Delete a department unless students, faculty, or courses still
    /// reference it
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let department_repo = DepartmentRepository::new(&txn);

        let department = department_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Department"))?;

        let students = StudentRepository::new(&txn)
            .count_by_department(department.id)
            .await?;
        let faculty = FacultyRepository::new(&txn)
            .count_by_department(department.id)
            .await?;

        if students > 0 || faculty > 0 {
            return Err(Error::conflict(
                "Cannot delete department with active students or faculty",
            ));
        }

        let courses = CourseRepository::new(&txn)
            .count_by_department(department.id)
            .await?;

        if courses > 0 {
            return Err(Error::conflict("Cannot delete department with assigned courses"));
        }

        department_repo.delete(department.id).await?;

        txn.commit().await?;

        Ok(())
    }

    async fn compose_dto(
        &self,
        department: entity::department::Model,
    ) -> Result<DepartmentDto, Error> {
        let students = StudentRepository::new(self.db)
            .count_by_department(department.id)
            .await?;
        let faculty = FacultyRepository::new(self.db)
            .count_by_department(department.id)
            .await?;
        let courses = CourseRepository::new(self.db)
            .count_by_department(department.id)
            .await?;

        Ok(DepartmentDto::from_model(department, students, faculty, courses))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::department::{CreateDepartmentRequest, UpdateDepartmentRequest},
        server::{
            data::student::{StudentRepository, StudentWrite},
            error::Error,
            service::department::DepartmentService,
            util::test::setup_db,
        },
    };

    fn create_request(code: &str, name: &str) -> CreateDepartmentRequest {
        CreateDepartmentRequest {
            code: code.to_string(),
            name: name.to_string(),
            description: None,
            head_faculty_id: None,
            building: None,
            contact_email: None,
            contact_phone: None,
            status: None,
        }
    }

    /// Expect duplicate name in any casing to be rejected as a conflict
    #[tokio::test]
    async fn test_create_duplicate_name_conflict() {
        let db = setup_db().await.unwrap();
        let service = DepartmentService::new(&db);

        service.create(create_request("CS", "Computer Science")).await.unwrap();

        let result = service.create(create_request("CSX", "computer science")).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
    }

    /// Expect a record to keep its own business keys through an update
    #[tokio::test]
    async fn test_update_keeps_own_keys() {
        let db = setup_db().await.unwrap();
        let service = DepartmentService::new(&db);

        let created = service
            .create(create_request("CS", "Computer Science"))
            .await
            .unwrap();

        let result = service
            .update(
                created.id,
                UpdateDepartmentRequest {
                    code: Some("CS".to_string()),
                    name: Some("Computer Science".to_string()),
                    description: Some("Updated".to_string()),
                    head_faculty_id: None,
                    building: None,
                    contact_email: None,
                    contact_phone: None,
                    status: None,
                },
            )
            .await;

        assert!(result.is_ok(), "Error: {:?}", result.err());
        assert_eq!(result.unwrap().description.as_deref(), Some("Updated"));
    }

    /// Expect deletion to be refused while a student references the department
    #[tokio::test]
    async fn test_delete_with_students_refused() {
        let db = setup_db().await.unwrap();
        let service = DepartmentService::new(&db);

        let department = service
            .create(create_request("CS", "Computer Science"))
            .await
            .unwrap();

        StudentRepository::new(&db)
            .create(StudentWrite {
                student_id: "STU-001".to_string(),
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
                department_id: Some(department.id),
                year_level: 1,
                status: entity::student::StudentStatus::Active,
                enrollment_date: chrono::NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
                date_of_birth: None,
                address: None,
                guardian_name: None,
                guardian_phone: None,
            })
            .await
            .unwrap();

        let result = service.delete(department.id).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert!(service.get(department.id).await.is_ok());
    }

    /// Expect deletion of an empty department to succeed
    #[tokio::test]
    async fn test_delete_empty_department() {
        let db = setup_db().await.unwrap();
        let service = DepartmentService::new(&db);

        let department = service
            .create(create_request("CS", "Computer Science"))
            .await
            .unwrap();

        service.delete(department.id).await.unwrap();

        assert!(matches!(
            service.get(department.id).await,
            Err(Error::NotFound { .. })
        ));
    }
}
