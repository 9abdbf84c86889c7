use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::academic_year::{CreateAcademicYearRequest, UpdateAcademicYearRequest},
    server::{
        data::academic_year::{AcademicYearRepository, AcademicYearWrite},
        error::Error,
        service::validate,
    },
};

use entity::academic_year::{AcademicYearStatus, Semester};

/// Service for academic year CRUD and the single-current-year invariant.
pub struct AcademicYearService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AcademicYearService<'a> {
    /// Creates a new instance of [`AcademicYearService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<entity::academic_year::Model>, Error> {
        let academic_year_repo = AcademicYearRepository::new(self.db);

        Ok(academic_year_repo.find_all().await?)
    }

    pub async fn get(&self, id: i32) -> Result<entity::academic_year::Model, Error> {
        let academic_year_repo = AcademicYearRepository::new(self.db);

        academic_year_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Academic year"))
    }

    pub async fn create(
        &self,
        request: CreateAcademicYearRequest,
    ) -> Result<entity::academic_year::Model, Error> {
        let mut errors = validate::check(&request);

        let start_date = validate::parse_date(&mut errors, "start_date", &request.start_date);
        let end_date = validate::parse_date(&mut errors, "end_date", &request.end_date);

        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end <= start {
                errors.add("end_date", "end_date must be after start_date");
            }
        }

        let semester = validate::parse_enum::<Semester>(&mut errors, "semester", &request.semester);
        let status = match &request.status {
            Some(value) => {
                validate::parse_enum::<AcademicYearStatus>(&mut errors, "status", value)
                    .unwrap_or(AcademicYearStatus::Active)
            }
            None => AcademicYearStatus::Active,
        };

        errors.into_result()?;

        let is_current = request.is_current.unwrap_or(false);

        let txn = self.db.begin().await?;

        let academic_year_repo = AcademicYearRepository::new(&txn);

        if academic_year_repo
            .exists_by_year_name_excluding(&request.year_name, None)
            .await?
        {
            return Err(Error::conflict(
                "Academic year name already exists. Please use a different name.",
            ));
        }

        // Exactly one current year: flipping this one on turns every other off
        // inside the same transaction.
        if is_current {
            academic_year_repo.clear_current(None).await?;
        }

        let academic_year = academic_year_repo
            .create(AcademicYearWrite {
                year_name: request.year_name,
                // Validation above guarantees both dates parsed
                start_date: start_date.expect("start_date validated"),
                end_date: end_date.expect("end_date validated"),
                semester: semester.expect("semester validated"),
                is_current,
                status,
            })
            .await?;

        txn.commit().await?;

        Ok(academic_year)
    }

    pub async fn update(
        &self,
        id: i32,
        request: UpdateAcademicYearRequest,
    ) -> Result<entity::academic_year::Model, Error> {
        let academic_year_repo = AcademicYearRepository::new(self.db);

        let existing = academic_year_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("Academic year"))?;

        let mut errors = validate::check(&request);

        let start_date = match &request.start_date {
            Some(value) => validate::parse_date(&mut errors, "start_date", value)
                .unwrap_or(existing.start_date),
            None => existing.start_date,
        };
        let end_date = match &request.end_date {
            Some(value) => {
                validate::parse_date(&mut errors, "end_date", value).unwrap_or(existing.end_date)
            }
            None => existing.end_date,
        };

        if end_date <= start_date {
            errors.add("end_date", "end_date must be after start_date");
        }

        let semester = match &request.semester {
            Some(value) => validate::parse_enum::<Semester>(&mut errors, "semester", value)
                .unwrap_or_else(|| existing.semester.clone()),
            None => existing.semester.clone(),
        };
        let status = match &request.status {
            Some(value) => {
                validate::parse_enum::<AcademicYearStatus>(&mut errors, "status", value)
                    .unwrap_or_else(|| existing.status.clone())
            }
            None => existing.status.clone(),
        };

        errors.into_result()?;

        let is_current = request.is_current.unwrap_or(existing.is_current);

        let write = AcademicYearWrite {
            year_name: request
                .year_name
                .clone()
                .unwrap_or_else(|| existing.year_name.clone()),
            start_date,
            end_date,
            semester,
            is_current,
            status,
        };

        let txn = self.db.begin().await?;

        let academic_year_repo = AcademicYearRepository::new(&txn);

        if academic_year_repo
            .exists_by_year_name_excluding(&write.year_name, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Academic year name already exists. Please use a different name.",
            ));
        }

        if request.is_current == Some(true) {
            academic_year_repo.clear_current(Some(id)).await?;
        }

        let academic_year = academic_year_repo.update(existing, write).await?;

        txn.commit().await?;

        Ok(academic_year)
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let academic_year_repo = AcademicYearRepository::new(self.db);

        let result = academic_year_repo.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(Error::not_found("Academic year"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        model::academic_year::{CreateAcademicYearRequest, UpdateAcademicYearRequest},
        server::{
            data::academic_year::AcademicYearRepository,
            error::Error,
            service::academic_year::AcademicYearService,
            util::test::setup_db,
        },
    };

    fn create_request(year_name: &str, is_current: bool) -> CreateAcademicYearRequest {
        CreateAcademicYearRequest {
            year_name: year_name.to_string(),
            start_date: "2025-09-01".to_string(),
            end_date: "2026-06-30".to_string(),
            semester: "1".to_string(),
            is_current: Some(is_current),
            status: Some("active".to_string()),
        }
    }

    /// Expect exactly one current year after two creates both claiming current
    #[tokio::test]
    async fn test_create_current_exclusivity() {
        let db = setup_db().await.unwrap();
        let service = AcademicYearService::new(&db);

        let first = service.create(create_request("2024-2025", true)).await.unwrap();
        let second = service.create(create_request("2025-2026", true)).await.unwrap();

        let repo = AcademicYearRepository::new(&db);
        assert_eq!(repo.count_current().await.unwrap(), 1);

        let first = repo.get_by_id(first.id).await.unwrap().unwrap();
        let second = repo.get_by_id(second.id).await.unwrap().unwrap();
        assert!(!first.is_current);
        assert!(second.is_current);
    }

    /// Expect setting a year current on update to unset the previous holder
    #[tokio::test]
    async fn test_update_current_exclusivity() {
        let db = setup_db().await.unwrap();
        let service = AcademicYearService::new(&db);

        let first = service.create(create_request("2024-2025", true)).await.unwrap();
        let second = service.create(create_request("2025-2026", false)).await.unwrap();

        service
            .update(
                second.id,
                UpdateAcademicYearRequest {
                    year_name: None,
                    start_date: None,
                    end_date: None,
                    semester: None,
                    is_current: Some(true),
                    status: None,
                },
            )
            .await
            .unwrap();

        let repo = AcademicYearRepository::new(&db);
        assert_eq!(repo.count_current().await.unwrap(), 1);
        assert!(repo.get_by_id(second.id).await.unwrap().unwrap().is_current);
        assert!(!repo.get_by_id(first.id).await.unwrap().unwrap().is_current);
    }

    /// Expect end_date on or before start_date to be rejected as a field error
    #[tokio::test]
    async fn test_end_date_before_start_date() {
        let db = setup_db().await.unwrap();
        let service = AcademicYearService::new(&db);

        let mut request = create_request("2025-2026", false);
        request.end_date = "2025-09-01".to_string();

        let result = service.create(request).await;

        match result {
            Err(Error::ValidationError(errors)) => {
                assert!(errors.fields.contains_key("end_date"))
            }
            other => panic!("Expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    /// Expect a duplicate year name to be rejected as a conflict
    #[tokio::test]
    async fn test_duplicate_year_name_conflict() {
        let db = setup_db().await.unwrap();
        let service = AcademicYearService::new(&db);

        service.create(create_request("2025-2026", false)).await.unwrap();

        let result = service.create(create_request("2025-2026", false)).await;

        assert!(matches!(result, Err(Error::Conflict(_))));
    }
}
