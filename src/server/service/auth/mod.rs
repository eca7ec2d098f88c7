//! Username and password authentication.
//!
//! This module provides the `AuthService` for registering accounts and checking sign-in
//! credentials. Session handling stays in the controller layer; the service only deals with
//! users and their password hashes.

pub mod password;

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParams, SignInParams, SignUpParams, User, UserCredentials},
};

/// Message returned when a username or email is already registered.
const USER_EXISTS_MESSAGE: &str = "User already exists";

/// Service for user registration and credential checks.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new AuthService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new user account.
    ///
    /// Rejects the request when either the username or the email is already taken, hashes
    /// the password with argon2, then inserts the user. A unique constraint violation from a
    /// concurrent sign-up is reported the same way as the up-front check.
    ///
    /// # Returns
    /// - `Ok(User)` - Newly created user
    /// - `Err(AppError::BadRequest)` - Username or email already registered
    /// - `Err(AppError::AuthErr(AuthError::PasswordHash))` - Hasher failure
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn sign_up(&self, params: SignUpParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if repo
            .exists_by_username_or_email(&params.username, &params.email)
            .await?
        {
            return Err(AppError::BadRequest(USER_EXISTS_MESSAGE.to_string()));
        }

        let SignUpParams {
            username,
            email,
            password: plain_password,
        } = params;

        let password_hash = run_blocking(move || password::hash_password(&plain_password)).await?;

        let result = repo
            .create(CreateUserParams {
                username,
                email,
                password_hash,
            })
            .await;

        match result {
            Ok(user) => Ok(user),
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::BadRequest(USER_EXISTS_MESSAGE.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a username and password.
    ///
    /// Unknown usernames and wrong passwords produce the same error.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(AuthError::InvalidCredentials))` - Unknown user or wrong password
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn sign_in(&self, params: SignInParams) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        let Some(credentials) = repo.find_credentials_by_username(&params.username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        let UserCredentials {
            user,
            password_hash,
        } = credentials;

        let plain_password = params.password;
        let verified = run_blocking(move || {
            password::verify_password(&plain_password, &password_hash)
        })
        .await?;

        if !verified {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }

    /// Looks up the user behind a session, if any.
    ///
    /// A session pointing at a deleted user is treated as anonymous.
    pub async fn current_user(&self, user_id: Option<i32>) -> Result<Option<User>, AppError> {
        let Some(user_id) = user_id else {
            return Ok(None);
        };

        let repo = UserRepository::new(self.db);

        Ok(repo.find_by_id(user_id).await?)
    }
}

/// Runs CPU-heavy password work on the blocking thread pool.
async fn run_blocking<T, F>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::InternalError(format!("Password task failed: {}", e)))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn sign_up_params(username: &str, email: &str) -> SignUpParams {
        SignUpParams {
            username: username.to_string(),
            email: email.to_string(),
            password: "correct horse".to_string(),
        }
    }

    #[tokio::test]
    async fn sign_up_then_sign_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        let user = service
            .sign_up(sign_up_params("archmage", "archmage@example.com"))
            .await?;

        let signed_in = service
            .sign_in(SignInParams {
                username: "archmage".to_string(),
                password: "correct horse".to_string(),
            })
            .await?;

        assert_eq!(signed_in.id, user.id);

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_rejects_duplicate_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        factory::user::UserFactory::new(db)
            .email("archmage@example.com")
            .build()
            .await?;

        let service = AuthService::new(db);
        let result = service
            .sign_up(sign_up_params("newcomer", "archmage@example.com"))
            .await;

        match result {
            Err(AppError::BadRequest(msg)) => assert_eq!(msg, "User already exists"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        Ok(())
    }

    #[tokio::test]
    async fn sign_in_rejects_wrong_password() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);
        service
            .sign_up(sign_up_params("archmage", "archmage@example.com"))
            .await?;

        let result = service
            .sign_in(SignInParams {
                username: "archmage".to_string(),
                password: "wrong horse".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn sign_in_rejects_unknown_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AuthService::new(db)
            .sign_in(SignInParams {
                username: "nobody".to_string(),
                password: "correct horse".to_string(),
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidCredentials))
        ));

        Ok(())
    }

    #[tokio::test]
    async fn current_user_is_none_without_session_user() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let service = AuthService::new(db);

        assert_eq!(service.current_user(None).await?, None);
        assert_eq!(service.current_user(Some(9999)).await?, None);

        Ok(())
    }
}
