use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::department::DepartmentStatus;

/// Fully validated department fields ready for persistence.
///
/// Services build one of these from a create payload, or by merging an update
/// payload over the existing row, so insert and update share a single shape.
pub struct DepartmentWrite {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub head_faculty_id: Option<i32>,
    pub building: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub status: DepartmentStatus,
}

pub struct DepartmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DepartmentRepository<'a, C> {
    /// Creates a new instance of [`DepartmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Create a department from validated fields
    pub async fn create(&self, write: DepartmentWrite) -> Result<entity::department::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let department = entity::department::ActiveModel {
            code: ActiveValue::Set(write.code),
            name: ActiveValue::Set(write.name),
            description: ActiveValue::Set(write.description),
            head_faculty_id: ActiveValue::Set(write.head_faculty_id),
            building: ActiveValue::Set(write.building),
            contact_email: ActiveValue::Set(write.contact_email),
            contact_phone: ActiveValue::Set(write.contact_phone),
            status: ActiveValue::Set(write.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        department.insert(self.db).await
    }

    /// Create the bare department row used by course department resolution:
    /// name only, empty description, active status.
    pub async fn create_minimal(&self, name: &str) -> Result<entity::department::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let department = entity::department::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(Some(String::new())),
            status: ActiveValue::Set(DepartmentStatus::Active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        department.insert(self.db).await
    }

    /// Overwrite a department row with validated fields
    pub async fn update(
        &self,
        model: entity::department::Model,
        write: DepartmentWrite,
    ) -> Result<entity::department::Model, DbErr> {
        let mut department: entity::department::ActiveModel = model.into();

        department.code = ActiveValue::Set(write.code);
        department.name = ActiveValue::Set(write.name);
        department.description = ActiveValue::Set(write.description);
        department.head_faculty_id = ActiveValue::Set(write.head_faculty_id);
        department.building = ActiveValue::Set(write.building);
        department.contact_email = ActiveValue::Set(write.contact_email);
        department.contact_phone = ActiveValue::Set(write.contact_phone);
        department.status = ActiveValue::Set(write.status);
        department.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        department.update(self.db).await
    }

    /// Get a department using its ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find_by_id(id).one(self.db).await
    }

    /// Get departments for a set of IDs, used to batch-resolve display names
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::department::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Department::find()
            .filter(entity::department::Column::Id.is_in(ids))
            .all(self.db)
            .await
    }

    /// All departments in natural name order
    pub async fn find_all(&self) -> Result<Vec<entity::department::Model>, DbErr> {
        entity::prelude::Department::find()
            .order_by_asc(entity::department::Column::Name)
            .all(self.db)
            .await
    }

    /// Case-insensitive lookup by name, with surrounding whitespace ignored
    pub async fn find_by_name_case_insensitive(
        &self,
        name: &str,
    ) -> Result<Option<entity::department::Model>, DbErr> {
        entity::prelude::Department::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(entity::department::Column::Name)))
                    .eq(name.trim().to_lowercase()),
            )
            .one(self.db)
            .await
    }

    /// Whether a department other than `exclude_id` already uses this code
    pub async fn exists_by_code_excluding(
        &self,
        code: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Department::find()
            .filter(entity::department::Column::Code.eq(code));

        if let Some(id) = exclude_id {
            query = query.filter(entity::department::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Whether a department other than `exclude_id` already uses this name,
    /// compared case-insensitively
    pub async fn exists_by_name_excluding(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Department::find().filter(
            Expr::expr(Func::lower(Expr::col(entity::department::Column::Name)))
                .eq(name.trim().to_lowercase()),
        );

        if let Some(id) = exclude_id {
            query = query.filter(entity::department::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Deletes a department
    ///
    /// Returns OK regardless of the department existing, to confirm the
    /// deletion result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Department::delete_by_id(id).exec(self.db).await
    }

    pub async fn count_all(&self) -> Result<u64, DbErr> {
        entity::prelude::Department::find().count(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::server::{
        data::department::{DepartmentRepository, DepartmentWrite},
        util::test::setup_db,
    };
    use entity::department::DepartmentStatus;

    fn write(code: &str, name: &str) -> DepartmentWrite {
        DepartmentWrite {
            code: Some(code.to_string()),
            name: name.to_string(),
            description: None,
            head_faculty_id: None,
            building: None,
            contact_email: None,
            contact_phone: None,
            status: DepartmentStatus::Active,
        }
    }

    /// Expect success when creating a department from validated fields
    #[tokio::test]
    async fn test_create_department_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let department_repo = DepartmentRepository::new(&db);

        let created = department_repo.create(write("CS", "Computer Science")).await?;

        assert_eq!(created.code.as_deref(), Some("CS"));
        assert_eq!(created.name, "Computer Science");
        assert_eq!(created.status, DepartmentStatus::Active);

        Ok(())
    }

    /// Expect minimal rows to carry an empty description and active status
    #[tokio::test]
    async fn test_create_minimal_department() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let department_repo = DepartmentRepository::new(&db);

        let created = department_repo.create_minimal("Physics").await?;

        assert!(created.code.is_none());
        assert_eq!(created.description.as_deref(), Some(""));
        assert_eq!(created.status, DepartmentStatus::Active);

        Ok(())
    }

    /// Expect lookup to match regardless of casing and surrounding whitespace
    #[tokio::test]
    async fn test_find_by_name_case_insensitive() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let department_repo = DepartmentRepository::new(&db);

        let created = department_repo.create(write("CS", "Computer Science")).await?;

        let found = department_repo
            .find_by_name_case_insensitive("  computer SCIENCE ")
            .await?;

        assert_eq!(found.map(|d| d.id), Some(created.id));

        Ok(())
    }

    /// Expect the exclusion ID to make a record's own name not count as taken
    #[tokio::test]
    async fn test_exists_by_name_excluding_self() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let department_repo = DepartmentRepository::new(&db);

        let created = department_repo.create(write("CS", "Computer Science")).await?;

        assert!(department_repo.exists_by_name_excluding("computer science", None).await?);
        assert!(
            !department_repo
                .exists_by_name_excluding("computer science", Some(created.id))
                .await?
        );

        Ok(())
    }

    /// Expect no rows affected when deleting a department that does not exist
    #[tokio::test]
    async fn test_delete_department_none() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let department_repo = DepartmentRepository::new(&db);

        let result = department_repo.delete(42).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }
}
