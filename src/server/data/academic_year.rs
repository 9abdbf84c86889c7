use chrono::{NaiveDate, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::academic_year::{AcademicYearStatus, Semester};

/// Fully validated academic year fields ready for persistence
pub struct AcademicYearWrite {
    pub year_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub semester: Semester,
    pub is_current: bool,
    pub status: AcademicYearStatus,
}

pub struct AcademicYearRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AcademicYearRepository<'a, C> {
    /// Creates a new instance of [`AcademicYearRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        write: AcademicYearWrite,
    ) -> Result<entity::academic_year::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let academic_year = entity::academic_year::ActiveModel {
            year_name: ActiveValue::Set(write.year_name),
            start_date: ActiveValue::Set(write.start_date),
            end_date: ActiveValue::Set(write.end_date),
            semester: ActiveValue::Set(write.semester),
            is_current: ActiveValue::Set(write.is_current),
            status: ActiveValue::Set(write.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        academic_year.insert(self.db).await
    }

    pub async fn update(
        &self,
        model: entity::academic_year::Model,
        write: AcademicYearWrite,
    ) -> Result<entity::academic_year::Model, DbErr> {
        let mut academic_year: entity::academic_year::ActiveModel = model.into();

        academic_year.year_name = ActiveValue::Set(write.year_name);
        academic_year.start_date = ActiveValue::Set(write.start_date);
        academic_year.end_date = ActiveValue::Set(write.end_date);
        academic_year.semester = ActiveValue::Set(write.semester);
        academic_year.is_current = ActiveValue::Set(write.is_current);
        academic_year.status = ActiveValue::Set(write.status);
        academic_year.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        academic_year.update(self.db).await
    }

    pub async fn get_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::academic_year::Model>, DbErr> {
        entity::prelude::AcademicYear::find_by_id(id).one(self.db).await
    }

    /// All academic years, most recent first
    pub async fn find_all(&self) -> Result<Vec<entity::academic_year::Model>, DbErr> {
        entity::prelude::AcademicYear::find()
            .order_by_desc(entity::academic_year::Column::StartDate)
            .all(self.db)
            .await
    }

    /// Whether a row other than `exclude_id` already uses this year name
    pub async fn exists_by_year_name_excluding(
        &self,
        year_name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::AcademicYear::find()
            .filter(entity::academic_year::Column::YearName.eq(year_name));

        if let Some(id) = exclude_id {
            query = query.filter(entity::academic_year::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Unset is_current on every row, or every row except `exclude_id`.
    ///
    /// Runs inside the same transaction as the write that sets the new current
    /// row, so readers never observe two current years.
    pub async fn clear_current(&self, exclude_id: Option<i32>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::AcademicYear::update_many()
            .col_expr(entity::academic_year::Column::IsCurrent, Expr::value(false))
            .filter(entity::academic_year::Column::IsCurrent.eq(true));

        if let Some(id) = exclude_id {
            query = query.filter(entity::academic_year::Column::Id.ne(id));
        }

        let result = query.exec(self.db).await?;

        Ok(result.rows_affected)
    }

    pub async fn count_current(&self) -> Result<u64, DbErr> {
        entity::prelude::AcademicYear::find()
            .filter(entity::academic_year::Column::IsCurrent.eq(true))
            .count(self.db)
            .await
    }

    /// Deletes an academic year
    ///
    /// Returns OK regardless of the row existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::AcademicYear::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use crate::server::{
        data::academic_year::{AcademicYearRepository, AcademicYearWrite},
        util::test::setup_db,
    };
    use entity::academic_year::{AcademicYearStatus, Semester};

    fn write(year_name: &str, is_current: bool) -> AcademicYearWrite {
        AcademicYearWrite {
            year_name: year_name.to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 6, 30).unwrap(),
            semester: Semester::First,
            is_current,
            status: AcademicYearStatus::Active,
        }
    }

    /// Expect clear_current to unset every current row
    #[tokio::test]
    async fn test_clear_current_all() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let repo = AcademicYearRepository::new(&db);

        repo.create(write("2024-2025", true)).await?;
        repo.create(write("2025-2026", false)).await?;

        let cleared = repo.clear_current(None).await?;

        assert_eq!(cleared, 1);
        assert_eq!(repo.count_current().await?, 0);

        Ok(())
    }

    /// Expect clear_current to leave the excluded row untouched
    #[tokio::test]
    async fn test_clear_current_excluding() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let repo = AcademicYearRepository::new(&db);

        let kept = repo.create(write("2024-2025", true)).await?;
        repo.create(write("2023-2024", true)).await?;

        repo.clear_current(Some(kept.id)).await?;

        assert_eq!(repo.count_current().await?, 1);
        let kept = repo.get_by_id(kept.id).await?.unwrap();
        assert!(kept.is_current);

        Ok(())
    }

    /// Expect year name uniqueness check to exclude the record itself
    #[tokio::test]
    async fn test_exists_by_year_name_excluding() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let repo = AcademicYearRepository::new(&db);

        let created = repo.create(write("2025-2026", false)).await?;

        assert!(repo.exists_by_year_name_excluding("2025-2026", None).await?);
        assert!(
            !repo
                .exists_by_year_name_excluding("2025-2026", Some(created.id))
                .await?
        );

        Ok(())
    }
}
