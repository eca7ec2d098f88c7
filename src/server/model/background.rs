//! Background domain models and parameters.

use crate::{
    model::background::{BackgroundDto, CreateBackgroundDto},
    server::{
        error::AppError,
        util::validate::{optional_text, required_number, required_text},
    },
};

/// A character-creation background trait.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub subtype: String,
    pub cost: i32,
    pub description: String,
    pub page: Option<String>,
}

impl Background {
    pub fn into_dto(self) -> BackgroundDto {
        BackgroundDto {
            id: self.id,
            name: self.name,
            category: self.category,
            subtype: self.subtype,
            cost: self.cost,
            description: self.description,
            page: self.page,
        }
    }

    pub fn from_entity(entity: entity::background::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            category: entity.category,
            subtype: entity.subtype,
            cost: entity.cost,
            description: entity.description,
            page: entity.page,
        }
    }
}

/// Parameters for inserting a background.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateBackgroundParams {
    pub name: String,
    pub category: String,
    pub subtype: String,
    pub cost: i32,
    pub description: String,
    pub page: Option<String>,
}

impl CreateBackgroundParams {
    /// Validates a creation DTO and converts it to parameters.
    ///
    /// Only `page` is optional.
    pub fn from_dto(dto: CreateBackgroundDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(dto.name, "name")?,
            category: required_text(dto.category, "category")?,
            subtype: required_text(dto.subtype, "subtype")?,
            cost: required_number(dto.cost, "cost")?,
            description: required_text(dto.description, "description")?,
            page: optional_text(dto.page),
        })
    }
}
