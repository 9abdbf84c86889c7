use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::user::{CreateUserRequest, UpdateUserRequest, UserDto},
    server::{
        data::user::{UserRepository, UserWrite},
        error::Error,
        service::validate,
        util::hash,
    },
};

use entity::user::{UserRole, UserStatus};

/// Service for user account CRUD and the last-admin deletion guard.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self) -> Result<Vec<UserDto>, Error> {
        let user_repo = UserRepository::new(self.db);

        let users = user_repo.find_all().await?;

        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("User"))?;

        Ok(UserDto::from(user))
    }

    pub async fn create(&self, request: CreateUserRequest) -> Result<UserDto, Error> {
        let mut errors = validate::check(&request);

        let role = validate::parse_enum::<UserRole>(&mut errors, "role", &request.role);
        let status = match &request.status {
            Some(value) => validate::parse_enum::<UserStatus>(&mut errors, "status", value)
                .unwrap_or(UserStatus::Active),
            None => UserStatus::Active,
        };

        errors.into_result()?;

        let password_hash = hash::hash_password(&request.password)?;

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);

        if user_repo
            .exists_by_email_excluding(&request.email, None)
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let user = user_repo
            .create(UserWrite {
                name: request.name,
                email: request.email,
                password_hash,
                // Validation above guarantees the role parsed
                role: role.expect("role validated"),
                status,
            })
            .await?;

        txn.commit().await?;

        Ok(UserDto::from(user))
    }

    pub async fn update(&self, id: i32, request: UpdateUserRequest) -> Result<UserDto, Error> {
        let user_repo = UserRepository::new(self.db);

        let existing = user_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("User"))?;

        let mut errors = validate::check(&request);

        let role = match &request.role {
            Some(value) => validate::parse_enum::<UserRole>(&mut errors, "role", value)
                .unwrap_or_else(|| existing.role.clone()),
            None => existing.role.clone(),
        };
        let status = match &request.status {
            Some(value) => validate::parse_enum::<UserStatus>(&mut errors, "status", value)
                .unwrap_or_else(|| existing.status.clone()),
            None => existing.status.clone(),
        };

        errors.into_result()?;

        let password_hash = match &request.password {
            Some(password) => hash::hash_password(password)?,
            None => existing.password_hash.clone(),
        };

        let write = UserWrite {
            name: request.name.clone().unwrap_or_else(|| existing.name.clone()),
            email: request.email.clone().unwrap_or_else(|| existing.email.clone()),
            password_hash,
            role,
            status,
        };

        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);

        if user_repo
            .exists_by_email_excluding(&write.email, Some(id))
            .await?
        {
            return Err(Error::conflict(
                "Email already exists. Please use a different email.",
            ));
        }

        let user = user_repo.update(existing, write).await?;

        txn.commit().await?;

        Ok(UserDto::from(user))
    }

    /// Delete a user unless they are the last remaining admin
    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);

        let user = user_repo
            .get_by_id(id)
            .await?
            .ok_or(Error::not_found("User"))?;

        if user.role == UserRole::Admin && user_repo.count_by_role(UserRole::Admin).await? == 1 {
            return Err(Error::conflict("Cannot delete the last admin user"));
        }

        user_repo.delete(user.id).await?;

        txn.commit().await?;

        Ok(())
    }
}
