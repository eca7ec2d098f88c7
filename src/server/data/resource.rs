//! Resource data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::resource::{CreateResourceParams, Resource};

pub struct ResourceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ResourceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a resource.
    pub async fn create(&self, params: CreateResourceParams) -> Result<Resource, DbErr> {
        let entity = entity::resource::ActiveModel {
            name: ActiveValue::Set(params.name),
            resource_type: ActiveValue::Set(params.resource_type),
            category: ActiveValue::Set(params.category),
            description: ActiveValue::Set(params.description),
            url: ActiveValue::Set(params.url),
            author: ActiveValue::Set(params.author),
            image_url: ActiveValue::Set(params.image_url),
            featured: ActiveValue::Set(params.featured),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Resource::from_entity(entity))
    }

    /// Gets all resources: featured first, then by type, then by name.
    pub async fn get_all(&self) -> Result<Vec<Resource>, DbErr> {
        let entities = entity::prelude::Resource::find()
            .order_by_desc(entity::resource::Column::Featured)
            .order_by_asc(entity::resource::Column::ResourceType)
            .order_by_asc(entity::resource::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Resource::from_entity).collect())
    }
}
