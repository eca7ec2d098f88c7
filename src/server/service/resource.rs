use sea_orm::DatabaseConnection;

use crate::server::{
    data::resource::ResourceRepository,
    error::AppError,
    model::resource::{CreateResourceParams, Resource},
};

pub struct ResourceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a resource link to the catalogue
    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, AppError> {
        let repo = ResourceRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists resources with featured entries first
    pub async fn list(&self) -> Result<Vec<Resource>, AppError> {
        let repo = ResourceRepository::new(self.db);

        Ok(repo.get_all().await?)
    }
}
