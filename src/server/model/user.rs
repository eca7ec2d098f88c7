//! User domain models and parameters.
//!
//! Users sign up with a username, email and password. Only the argon2 hash of the
//! password is stored; it never leaves the server model.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{SignInDto, SignUpDto, UserDto},
    server::{error::AppError, util::validate::required_text},
};

/// Minimum accepted password length at sign-up.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A registered user.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            created_at: entity.created_at,
        }
    }
}

/// User record together with its stored password hash, used only during sign-in.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

impl UserCredentials {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        let password_hash = entity.password_hash.clone();
        Self {
            user: User::from_entity(entity),
            password_hash,
        }
    }
}

/// Validated sign-up request. The password is still plain text at this stage.
#[derive(Debug, Clone)]
pub struct SignUpParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignUpParams {
    /// Validates a sign-up DTO.
    ///
    /// # Returns
    /// - `Ok(SignUpParams)` - All fields present and password long enough
    /// - `Err(AppError::BadRequest)` - Missing field or password shorter than
    ///   `MIN_PASSWORD_LENGTH`
    pub fn from_dto(dto: SignUpDto) -> Result<Self, AppError> {
        let username = required_text(dto.username, "username")?;
        let email = required_text(dto.email, "email")?.to_lowercase();
        let password = dto
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?;

        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        Ok(Self {
            username,
            email,
            password,
        })
    }
}

/// Parameters for inserting a user once the password has been hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Validated sign-in request.
#[derive(Debug, Clone)]
pub struct SignInParams {
    pub username: String,
    pub password: String,
}

impl SignInParams {
    pub fn from_dto(dto: SignInDto) -> Result<Self, AppError> {
        Ok(Self {
            username: required_text(dto.username, "username")?,
            password: dto
                .password
                .filter(|p| !p.is_empty())
                .ok_or_else(|| AppError::BadRequest("password is required".to_string()))?,
        })
    }
}
