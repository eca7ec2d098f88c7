use sea_orm::DatabaseConnection;

use crate::server::{
    data::background::BackgroundRepository,
    error::AppError,
    model::background::{Background, CreateBackgroundParams},
};

pub struct BackgroundService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BackgroundService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a background to the catalogue
    pub async fn create(&self, params: CreateBackgroundParams) -> Result<Background, AppError> {
        let repo = BackgroundRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists backgrounds grouped by category
    pub async fn list(&self) -> Result<Vec<Background>, AppError> {
        let repo = BackgroundRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
