//! Administrative operations gated by the admin secret.
//!
//! This module provides the `AdminService` which checks the client-supplied password against
//! the configured admin secret and runs the destructive and seeding operations on the rote
//! catalogue.

pub mod seed;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use subtle::ConstantTimeEq;

use crate::server::{
    data::rote::RoteRepository,
    error::{auth::AuthError, AppError},
};

/// Service for password-gated catalogue maintenance.
pub struct AdminService<'a> {
    db: &'a DatabaseConnection,
    admin_password: &'a str,
}

impl<'a> AdminService<'a> {
    /// Creates a new AdminService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `admin_password` - Configured admin secret
    pub fn new(db: &'a DatabaseConnection, admin_password: &'a str) -> Self {
        Self { db, admin_password }
    }

    /// Checks a client-supplied password against the admin secret.
    ///
    /// The comparison runs in constant time with respect to the password contents.
    ///
    /// # Returns
    /// - `Ok(())` - Password matches
    /// - `Err(AppError::BadRequest)` - No password supplied
    /// - `Err(AppError::AuthErr(AuthError::InvalidAdminPassword))` - Password doesn't match
    pub fn verify_password(&self, password: Option<&str>) -> Result<(), AppError> {
        let Some(password) = password.filter(|p| !p.is_empty()) else {
            return Err(AppError::BadRequest("password is required".to_string()));
        };

        if !bool::from(password.as_bytes().ct_eq(self.admin_password.as_bytes())) {
            tracing::warn!("Rejected admin request with an invalid password");
            return Err(AuthError::InvalidAdminPassword.into());
        }

        Ok(())
    }

    /// Inserts the sample rote set.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rotes inserted, equal to the size of the sample set
    /// - `Err(AppError::DbErr)` - Database error during insert
    pub async fn seed(&self) -> Result<u64, AppError> {
        let repo = RoteRepository::new(self.db);

        let count = repo.create_many(seed::sample_rotes()).await?;
        tracing::info!("Seeded {} sample rotes", count);

        Ok(count)
    }

    /// Deletes every rote in the catalogue.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rotes deleted
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, AppError> {
        let repo = RoteRepository::new(self.db);

        let count = repo.delete_all().await?;
        tracing::info!("Deleted {} rotes", count);

        Ok(count)
    }
}
