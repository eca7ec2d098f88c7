//! Rote factory for creating test catalogue entries.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test rotes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let rote = RoteFactory::new(&db)
///     .name("Call Lightning")
///     .tradition("Verbena")
///     .spheres("Forces 3")
///     .level(3)
///     .build()
///     .await?;
/// ```
pub struct RoteFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    tradition: String,
    description: String,
    spheres: String,
    level: i32,
    page: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> RoteFactory<'a> {
    /// Creates a new RoteFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Rote {id}"`
    /// - tradition: `"Order of Hermes"`
    /// - spheres: `"Forces 1"`, level `1`
    /// - page: `None`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Rote {}", id),
            tradition: "Order of Hermes".to_string(),
            description: format!("Description for rote {}", id),
            spheres: "Forces 1".to_string(),
            level: 1,
            page: None,
            created_at: Utc::now(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn tradition(mut self, tradition: impl Into<String>) -> Self {
        self.tradition = tradition.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn spheres(mut self, spheres: impl Into<String>) -> Self {
        self.spheres = spheres.into();
        self
    }

    pub fn level(mut self, level: i32) -> Self {
        self.level = level;
        self
    }

    pub fn page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the rote entity into the database.
    pub async fn build(self) -> Result<entity::rote::Model, DbErr> {
        entity::rote::ActiveModel {
            name: ActiveValue::Set(self.name),
            tradition: ActiveValue::Set(self.tradition),
            description: ActiveValue::Set(self.description),
            spheres: ActiveValue::Set(self.spheres),
            level: ActiveValue::Set(self.level),
            page: ActiveValue::Set(self.page),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rote with default values.
pub async fn create_rote(db: &DatabaseConnection) -> Result<entity::rote::Model, DbErr> {
    RoteFactory::new(db).build().await
}
