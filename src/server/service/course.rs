use std::collections::HashMap;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::course::{CourseDto, CreateCourseRequest, UpdateCourseRequest},
    server::{
        data::{
            course::{CourseRepository, CourseWrite},
            department::DepartmentRepository,
            enrollment::EnrollmentRepository,
            faculty::FacultyRepository,
        },
        error::Error,
        service::validate,
    },
};

use entity::{academic_year::Semester, course::CourseStatus};

/// Service for course CRUD, department resolution, and the enrollment
/// deletion guard.
pub struct CourseService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CourseService<'a> {
    /// Creates a new instance of [`CourseService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// All courses newest first, flattened with department and faculty names
    pub async fn list(&self) -> Result<Vec<CourseDto>, Error> {
        let course_repo = CourseRepository::new(self.db);

        let courses = course_repo.find_all().await?;

        let department_ids: Vec<i32> = courses.iter().filter_map(|c| c.department_id).collect();
        let faculty_ids: Vec<i32> = courses.iter().filter_map(|c| c.faculty_id).collect();

        let department_names: HashMap<i32, String> = DepartmentRepository::new(self.db)
            .get_by_ids(department_ids)
            .await?
            .into_iter()
            .map(|d| (d.id, d.name))
            .collect();
        let faculty_names: HashMap<i32, String> = FacultyRepository::new(self.db)
            .get_by_ids(faculty_ids)
            .await?
            .into_iter()
            .map(|f| (f.id, f.full_name))
            .collect();

        Ok(courses
            .into_iter()
            .map(|course| {
                let department_name =
                    course.department_id.and_then(|id| department_names.get(&id).cloned());
                let faculty_name =
                    course.faculty_id.and_then(|id| faculty_names.get(&id).cloned());

                CourseDto::from_model(course, department_name, faculty_name)
            })
            .collect())
    }

    pub async fn get(&self, id: i32) -> Result<CourseDto, Error> {
        let course_repo = CourseRepository::new(self.db);

        let course = course_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Course"))?;

        self.compose_dto(course).await
    }

    pub async fn create(&self, request: CreateCourseRequest) -> Result<CourseDto, Error> {
        let mut errors = validate::check(&request);

        let semester = match &request.semester {
            Some(value) => validate::parse_enum::<Semester>(&mut errors, "semester", value),
            None => None,
        };
        let status = match &request.status {
            Some(value) => validate::parse_enum::<CourseStatus>(&mut errors, "status", value)
                .unwrap_or(CourseStatus::Active),
            None => CourseStatus::Active,
        };

        if let Some(year_level) = request.year_level {
            validate::check_year_level(&mut errors, "year_level", year_level);
        }

        if let Some(faculty_id) = request.faculty_id {
            let faculty_repo = FacultyRepository::new(self.db);
            if faculty_repo.get_by_id(faculty_id).await?.is_none() {
                errors.add(
                    "faculty_id",
                    "faculty_id does not reference an existing faculty member",
                );
            }
        }

        errors.into_result()?;

        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);

        if course_repo
            .exists_by_code_excluding(&request.course_code, None)
            .await?
        {
            return Err(Error::conflict(
                "Course code already exists. Please use a different code.",
            ));
        }

        let department_id = resolve_department(
            &txn,
            request.department_id,
            request.department_name.as_deref(),
        )
        .await?;

        let course = course_repo
            .create(CourseWrite {
                course_code: request.course_code,
                course_name: request.course_name,
                description: request.description,
                credits: request.credits.unwrap_or(3),
                department_id,
                faculty_id: request.faculty_id,
                semester,
                year_level: request.year_level,
                status,
            })
            .await?;

        txn.commit().await?;

        self.compose_dto(course).await
    }

    pub async fn update(&self, id: i32, request: UpdateCourseRequest) -> Result<CourseDto, Error> {
        let course_repo = CourseRepository::new(self.db);

        let existing = course_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Course"))?;

        let mut errors = validate::check(&request);

        let semester = match &request.semester {
            Some(value) => validate::parse_enum::<Semester>(&mut errors, "semester", value),
            None => existing.semester.clone(),
        };
        let status = match &request.status {
            Some(value) => validate::parse_enum::<CourseStatus>(&mut errors, "status", value)
                .unwrap_or_else(|| existing.status.clone()),
            None => existing.status.clone(),
        };

        if let Some(year_level) = request.year_level {
            validate::check_year_level(&mut errors, "year_level", year_level);
        }

        if let Some(faculty_id) = request.faculty_id {
            let faculty_repo = FacultyRepository::new(self.db);
            if faculty_repo.get_by_id(faculty_id).await?.is_none() {
                errors.add(
                    "faculty_id",
                    "faculty_id does not reference an existing faculty member",
                );
            }
        }

        errors.into_result()?;

        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);

        let course_code = request
            .course_code
            .clone()
            .unwrap_or_else(|| existing.course_code.clone());

        if course_repo
            .exists_by_code_excluding(&course_code, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Course code already exists. Please use a different code.",
            ));
        }

        let department_id = if request.department_id.is_some() || request.department_name.is_some()
        {
            resolve_department(&txn, request.department_id, request.department_name.as_deref())
                .await?
        } else {
            existing.department_id
        };

        let write = CourseWrite {
            course_code,
            course_name: request
                .course_name
                .clone()
                .unwrap_or_else(|| existing.course_name.clone()),
            description: request.description.clone().or_else(|| existing.description.clone()),
            credits: request.credits.unwrap_or(existing.credits),
            department_id,
            faculty_id: request.faculty_id.or(existing.faculty_id),
            semester,
            year_level: request.year_level.or(existing.year_level),
            status,
        };

        let course = course_repo.update(existing, write).await?;

        txn.commit().await?;

        self.compose_dto(course).await
    }

    /// Delete a course unless students are enrolled in it
    pub async fn delete(&self, id: i32) -> Result<String, Error> {
        let txn = self.db.begin().await?;

        let course_repo = CourseRepository::new(&txn);

        let course = course_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Course"))?;

        let enrolled = EnrollmentRepository::new(&txn)
            .count_by_course(course.id)
            .await?;

        if enrolled > 0 {
            return Err(Error::conflict(format!(
                "Cannot delete course. It has {} enrolled student(s).",
                enrolled
            )));
        }

        let name = course.course_name.clone();

        course_repo.delete(course.id).await?;

        txn.commit().await?;

        Ok(name)
    }

    async fn compose_dto(&self, course: entity::course::Model) -> Result<CourseDto, Error> {
        let department_name = match course.department_id {
            Some(department_id) => DepartmentRepository::new(self.db)
                .get_by_id(department_id)
                .await?
                .map(|d| d.name),
            None => None,
        };
        let faculty_name = match course.faculty_id {
            Some(faculty_id) => FacultyRepository::new(self.db)
                .get_by_id(faculty_id)
                .await?
                .map(|f| f.full_name),
            None => None,
        };

        Ok(CourseDto::from_model(course, department_name, faculty_name))
    }
}

/// Resolve the department reference for a course payload.
///
/// An explicit id wins. A name is trimmed and matched case-insensitively
/// against existing departments; a miss creates a bare active department and
/// uses its id. When the insert loses a race to a concurrent writer the unique
/// index rejects it and the winner's row is fetched instead.
pub async fn resolve_department<C: ConnectionTrait>(
    db: &C,
    department_id: Option<i32>,
    department_name: Option<&str>,
) -> Result<Option<i32>, Error> {
    if let Some(id) = department_id {
        return Ok(Some(id));
    }

    let name = match department_name.map(str::trim) {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(None),
    };

    let department_repo = DepartmentRepository::new(db);

    if let Some(existing) = department_repo.find_by_name_case_insensitive(name).await? {
        return Ok(Some(existing.id));
    }

    match department_repo.create_minimal(name).await {
        Ok(created) => Ok(Some(created.id)),
        Err(insert_err) => match department_repo.find_by_name_case_insensitive(name).await? {
            Some(existing) => Ok(Some(existing.id)),
            None => Err(insert_err.into()),
        },
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::course::{CreateCourseRequest, UpdateCourseRequest},
        server::{
            data::{
                department::DepartmentRepository,
                enrollment::EnrollmentRepository,
                student::{StudentRepository, StudentWrite},
            },
            error::Error,
            service::course::CourseService,
            util::test::setup_db,
        },
    };

    fn create_request(course_code: &str, department_name: Option<&str>) -> CreateCourseRequest {
        CreateCourseRequest {
            course_code: course_code.to_string(),
            course_name: "Intro".to_string(),
            description: None,
            credits: Some(3),
            department_id: None,
            department_name: department_name.map(str::to_string),
            faculty_id: None,
            semester: None,
            year_level: None,
            status: Some("active".to_string()),
        }
    }

    /// Expect a new department to be created and linked when the name is unknown
    #[tokio::test]
    async fn test_create_resolves_new_department() {
        let db = setup_db().await.unwrap();
        let service = CourseService::new(&db);

        let course = service
            .create(create_request("CS101", Some("Computer Science")))
            .await
            .unwrap();

        assert!(course.department_id.is_some());
        assert_eq!(course.department_name, "Computer Science");

        let department = DepartmentRepository::new(&db)
            .find_by_name_case_insensitive("computer science")
            .await
            .unwrap();
        assert!(department.is_some());
    }

    /// Expect a repeated name in different casing to reuse the existing
    /// department instead of creating a duplicate
    #[tokio::test]
    async fn test_create_reuses_department_case_insensitive() {
        let db = setup_db().await.unwrap();
        let service = CourseService::new(&db);

        let first = service
            .create(create_request("CS101", Some("Physics")))
            .await
            .unwrap();
        let second = service
            .create(create_request("CS102", Some("  PHYSICS ")))
            .await
            .unwrap();

        assert_eq!(first.department_id, second.department_id);

        let departments = DepartmentRepository::new(&db).find_all().await.unwrap();
        assert_eq!(departments.len(), 1);
    }

    /// Expect a duplicate course code to be rejected leaving one row behind
    #[tokio::test]
    async fn test_create_duplicate_code_conflict() {
        let db = setup_db().await.unwrap();
        let service = CourseService::new(&db);

        service.create(create_request("CS101", None)).await.unwrap();

        let result = service.create(create_request("CS101", None)).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
        assert_eq!(service.list().await.unwrap().len(), 1);
    }

    /// Expect updating a course to its own code to succeed
    #[tokio::test]
    async fn test_update_own_code_succeeds() {
        let db = setup_db().await.unwrap();
        let service = CourseService::new(&db);

        let course = service.create(create_request("CS101", None)).await.unwrap();

        let result = service
            .update(
                course.id,
                UpdateCourseRequest {
                    course_code: Some("CS101".to_string()),
                    course_name: Some("Intro to Programming".to_string()),
                    description: None,
                    credits: None,
                    department_id: None,
                    department_name: None,
                    faculty_id: None,
                    semester: None,
                    year_level: None,
                    status: None,
                },
            )
            .await;

        assert!(result.is_ok(), "Error: {:?}", result.err());
        assert_eq!(result.unwrap().course_name, "Intro to Programming");
    }

    /// Expect deletion to be refused while enrollments exist, naming the count
    #[tokio::test]
    async fn test_delete_with_enrollments_refused() {
        let db = setup_db().await.unwrap();
        let service = CourseService::new(&db);

        let course = service.create(create_request("CS101", None)).await.unwrap();

        let student = StudentRepository::new(&db)
            .create(StudentWrite {
                student_id: "STU-001".to_string(),
                full_name: "Jane Doe".to_string(),
                email: "jane@example.com".to_string(),
                phone: None,
                department_id: None,
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

        EnrollmentRepository::new(&db)
            .create(
                course.id,
                student.id,
                None,
                entity::enrollment::EnrollmentStatus::Enrolled,
            )
            .await
            .unwrap();

        let result = service.delete(course.id).await;

        match result {
            Err(Error::Conflict(message)) => assert!(message.contains("1 enrolled student")),
            other => panic!("Expected conflict, got {:?}", other.map(|_| ())),
        }
        assert!(service.get(course.id).await.is_ok());
    }
}
