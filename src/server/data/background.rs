//! Background data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::background::{Background, CreateBackgroundParams};

pub struct BackgroundRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BackgroundRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a background.
    pub async fn create(&self, params: CreateBackgroundParams) -> Result<Background, DbErr> {
        let entity = entity::background::ActiveModel {
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            subtype: ActiveValue::Set(params.subtype),
            cost: ActiveValue::Set(params.cost),
            description: ActiveValue::Set(params.description),
            page: ActiveValue::Set(params.page),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Background::from_entity(entity))
    }

    /// Gets all backgrounds ordered by category, then name.
    pub async fn get_all(&self) -> Result<Vec<Background>, DbErr> {
        let entities = entity::prelude::Background::find()
            .order_by_asc(entity::background::Column::Category)
            .order_by_asc(entity::background::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Background::from_entity).collect())
    }
}
