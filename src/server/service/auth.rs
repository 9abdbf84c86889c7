use sea_orm::DatabaseConnection;

use crate::{
    model::{auth::LoginRequest, user::UserDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        service::validate,
        util::hash,
    },
};

use entity::user::UserStatus;

/// Service for credential verification against stored user accounts.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Verify credentials and return the matching user profile.
    ///
    /// Unknown email, wrong password, and inactive accounts are all reported
    /// to the caller as the same credential failure.
    pub async fn login(&self, request: LoginRequest) -> Result<UserDto, Error> {
        validate::check(&request).into_result()?;

        let user_repo = UserRepository::new(self.db);

        let user = user_repo
            .get_by_email(&request.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !hash::verify_password(&request.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        if user.status != UserStatus::Active {
            return Err(AuthError::AccountInactive.into());
        }

        Ok(UserDto::from(user))
    }
}
