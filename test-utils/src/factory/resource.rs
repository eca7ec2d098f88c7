//! Resource factory for creating test catalogue links.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test resources with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let resource = ResourceFactory::new(&db)
///     .name("Sphere Reference")
///     .resource_type("Tool")
///     .featured(true)
///     .build()
///     .await?;
/// ```
pub struct ResourceFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    resource_type: String,
    category: String,
    description: String,
    url: String,
    author: Option<String>,
    image_url: Option<String>,
    featured: bool,
}

impl<'a> ResourceFactory<'a> {
    /// Creates a new ResourceFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Resource {id}"`
    /// - type: `"Article"`, category `"General"`
    /// - url: `"https://example.com/resource/{id}"`
    /// - featured: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Resource {}", id),
            resource_type: "Article".to_string(),
            category: "General".to_string(),
            description: format!("Description for resource {}", id),
            url: format!("https://example.com/resource/{}", id),
            author: None,
            image_url: None,
            featured: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn resource_type(mut self, resource_type: impl Into<String>) -> Self {
        self.resource_type = resource_type.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Builds and inserts the resource entity into the database.
    pub async fn build(self) -> Result<entity::resource::Model, DbErr> {
        entity::resource::ActiveModel {
            name: ActiveValue::Set(self.name),
            resource_type: ActiveValue::Set(self.resource_type),
            category: ActiveValue::Set(self.category),
            description: ActiveValue::Set(self.description),
            url: ActiveValue::Set(self.url),
            author: ActiveValue::Set(self.author),
            image_url: ActiveValue::Set(self.image_url),
            featured: ActiveValue::Set(self.featured),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a resource with default values.
pub async fn create_resource(db: &DatabaseConnection) -> Result<entity::resource::Model, DbErr> {
    ResourceFactory::new(db).build().await
}
