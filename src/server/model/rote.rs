//! Rote domain models and parameters.
//!
//! Rotes are named magical techniques catalogued with their tradition, the spheres they
//! draw on and their level.

use chrono::{DateTime, Utc};

use crate::{
    model::rote::{CreateRoteDto, RoteDto},
    server::{
        error::AppError,
        util::validate::{optional_text, required_number, required_text},
    },
};

/// A catalogued rote.
#[derive(Debug, Clone, PartialEq)]
pub struct Rote {
    pub id: i32,
    pub name: String,
    pub tradition: String,
    pub description: String,
    /// Free-text sphere requirements such as `"Forces 2, Prime 1"`.
    pub spheres: String,
    pub level: i32,
    /// Optional source-book page reference.
    pub page: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Rote {
    /// Converts the rote domain model to a DTO for API responses.
    pub fn into_dto(self) -> RoteDto {
        RoteDto {
            id: self.id,
            name: self.name,
            tradition: self.tradition,
            description: self.description,
            spheres: self.spheres,
            level: self.level,
            page: self.page,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a rote domain model at the repository boundary.
    pub fn from_entity(entity: entity::rote::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            tradition: entity.tradition,
            description: entity.description,
            spheres: entity.spheres,
            level: entity.level,
            page: entity.page,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a rote.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateRoteParams {
    pub name: String,
    pub tradition: String,
    pub description: String,
    pub spheres: String,
    pub level: i32,
    pub page: Option<String>,
}

impl CreateRoteParams {
    /// Validates a creation DTO and converts it to parameters.
    ///
    /// # Returns
    /// - `Ok(CreateRoteParams)` - All required fields present
    /// - `Err(AppError::BadRequest)` - `name`, `tradition`, `description`, `spheres`
    ///   or `level` missing
    pub fn from_dto(dto: CreateRoteDto) -> Result<Self, AppError> {
        Ok(Self {
            name: required_text(dto.name, "name")?,
            tradition: required_text(dto.tradition, "tradition")?,
            description: required_text(dto.description, "description")?,
            spheres: required_text(dto.spheres, "spheres")?,
            level: required_number(dto.level, "level")?,
            page: optional_text(dto.page),
        })
    }
}

/// Optional filters applied when listing rotes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoteFilter {
    /// Exact tradition match.
    pub tradition: Option<String>,
    /// Substring match against the sphere requirements.
    pub sphere: Option<String>,
}
