use sea_orm::DatabaseConnection;

use crate::server::{
    data::rote::RoteRepository,
    error::AppError,
    model::rote::{CreateRoteParams, Rote, RoteFilter},
};

pub struct RoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a rote to the catalogue
    pub async fn create(&self, params: CreateRoteParams) -> Result<Rote, AppError> {
        let repo = RoteRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists rotes matching the filter, ordered by name
    pub async fn list(&self, filter: RoteFilter) -> Result<Vec<Rote>, AppError> {
        let repo = RoteRepository::new(self.db);

        Ok(repo.get_all(filter).await?)
    }
}
