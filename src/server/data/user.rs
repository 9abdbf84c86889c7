use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use entity::user::{UserRole, UserStatus};

/// Fully validated user fields ready for persistence. `password_hash` is
/// already an Argon2 PHC string by the time it reaches this layer.
pub struct UserWrite {
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, write: UserWrite) -> Result<entity::user::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let user = entity::user::ActiveModel {
            name: ActiveValue::Set(write.name),
            email: ActiveValue::Set(write.email),
            password_hash: ActiveValue::Set(write.password_hash),
            role: ActiveValue::Set(write.role),
            status: ActiveValue::Set(write.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn update(
        &self,
        model: entity::user::Model,
        write: UserWrite,
    ) -> Result<entity::user::Model, DbErr> {
        let mut user: entity::user::ActiveModel = model.into();

        user.name = ActiveValue::Set(write.name);
        user.email = ActiveValue::Set(write.email);
        user.password_hash = ActiveValue::Set(write.password_hash);
        user.role = ActiveValue::Set(write.role);
        user.status = ActiveValue::Set(write.status);
        user.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        user.update(self.db).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// All users, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_desc(entity::user::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Whether a user other than `exclude_id` already uses this email
    pub async fn exists_by_email_excluding(
        &self,
        email: &str,
        exclude_id: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));

        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    pub async fn count_by_role(&self, role: UserRole) -> Result<u64, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(role))
            .count(self.db)
            .await
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of the user existing, to confirm the deletion
    /// result check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::User::delete_by_id(id).exec(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::server::{
        data::user::{UserRepository, UserWrite},
        util::test::setup_db,
    };
    use entity::user::{UserRole, UserStatus};

    fn write(email: &str, role: UserRole) -> UserWrite {
        UserWrite {
            name: "Test User".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
            role,
            status: UserStatus::Active,
        }
    }

    /// Expect success when creating a new user
    #[tokio::test]
    async fn test_create_user_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user_repo = UserRepository::new(&db);

        let created = user_repo.create(write("admin@example.com", UserRole::Admin)).await?;

        assert_eq!(created.email, "admin@example.com");
        assert_eq!(created.role, UserRole::Admin);

        Ok(())
    }

    /// Expect the admin count to track only admin-role users
    #[tokio::test]
    async fn test_count_by_role() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user_repo = UserRepository::new(&db);

        user_repo.create(write("admin@example.com", UserRole::Admin)).await?;
        user_repo.create(write("staff@example.com", UserRole::Staff)).await?;

        assert_eq!(user_repo.count_by_role(UserRole::Admin).await?, 1);
        assert_eq!(user_repo.count_by_role(UserRole::Staff).await?, 1);
        assert_eq!(user_repo.count_by_role(UserRole::Student).await?, 0);

        Ok(())
    }

    /// Expect success when deleting a user
    #[tokio::test]
    async fn test_delete_user_success() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user_repo = UserRepository::new(&db);

        let user = user_repo.create(write("admin@example.com", UserRole::Admin)).await?;

        let result = user_repo.delete(user.id).await?;

        assert_eq!(result.rows_affected, 1);
        assert!(user_repo.get_by_id(user.id).await?.is_none());

        Ok(())
    }

    /// Expect no rows to be affected when deleting a user that does not exist
    #[tokio::test]
    async fn test_delete_user_none() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let user_repo = UserRepository::new(&db);

        let result = user_repo.delete(99).await?;

        assert_eq!(result.rows_affected, 0);

        Ok(())
    }
}
