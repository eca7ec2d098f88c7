//! Background factory for creating test character-creation traits.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test backgrounds with customizable fields.
pub struct BackgroundFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    category: String,
    subtype: String,
    cost: i32,
    description: String,
    page: Option<String>,
}

impl<'a> BackgroundFactory<'a> {
    /// Creates a new BackgroundFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Background {id}"`
    /// - category: `"Social"`, subtype `"Allies"`, cost `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Background {}", id),
            category: "Social".to_string(),
            subtype: "Allies".to_string(),
            cost: 1,
            description: format!("Description for background {}", id),
            page: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = subtype.into();
        self
    }

    pub fn cost(mut self, cost: i32) -> Self {
        self.cost = cost;
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    /// Builds and inserts the background entity into the database.
    pub async fn build(self) -> Result<entity::background::Model, DbErr> {
        entity::background::ActiveModel {
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            subtype: ActiveValue::Set(self.subtype),
            cost: ActiveValue::Set(self.cost),
            description: ActiveValue::Set(self.description),
            page: ActiveValue::Set(self.page),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a background with default values.
pub async fn create_background(
    db: &DatabaseConnection,
) -> Result<entity::background::Model, DbErr> {
    BackgroundFactory::new(db).build().await
}
