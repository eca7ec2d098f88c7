//! Resource domain models and parameters.
//!
//! Resources are external links (books, tools, articles) listed in the catalogue.
//! Featured resources are shown ahead of the rest.

use crate::{
    model::resource::{CreateResourceDto, ResourceDto},
    server::{
        error::AppError,
        util::validate::{optional_text, required_text},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub name: String,
    pub resource_type: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl Resource {
    pub fn into_dto(self) -> ResourceDto {
        ResourceDto {
            id: self.id,
            name: self.name,
            resource_type: self.resource_type,
            category: self.category,
            description: self.description,
            url: self.url,
            author: self.author,
            image_url: self.image_url,
            featured: self.featured,
        }
    }

    pub fn from_entity(entity: entity::resource::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            resource_type: entity.resource_type,
            category: entity.category,
            description: entity.description,
            url: entity.url,
            author: entity.author,
            image_url: entity.image_url,
            featured: entity.featured,
        }
    }
}

/// Parameters for inserting a resource.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateResourceParams {
    pub name: String,
    pub resource_type: String,
    pub category: String,
    pub description: String,
    pub url: String,
    pub author: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
}

impl CreateResourceParams {
    /// Validates a creation DTO and converts it to parameters.
    ///
    /// `author` and `image_url` are optional; `featured` defaults to false.
    pub fn from_dto(dto: CreateResourceDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(dto.name, "name")?,
            resource_type: required_text(dto.resource_type, "type")?,
            category: required_text(dto.category, "category")?,
            description: required_text(dto.description, "description")?,
            url: required_text(dto.url, "url")?,
            author: optional_text(dto.author),
            image_url: optional_text(dto.image_url),
            featured: dto.featured,
        })
    }
}
