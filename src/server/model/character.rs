//! Player character domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::character::{CharacterDto, CreateCharacterDto},
    server::{
        error::AppError,
        util::validate::{optional_text, required_text},
    },
};

/// Arete assigned when the creation form leaves it empty.
pub const DEFAULT_ARETE: i32 = 1;

/// A player character owned by a user.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub tradition: String,
    pub concept: Option<String>,
    pub essence: Option<String>,
    pub nature: Option<String>,
    pub demeanor: Option<String>,
    pub arete: i32,
    pub created_at: DateTime<Utc>,
}

impl Character {
    pub fn into_dto(self) -> CharacterDto {
        CharacterDto {
            id: self.id,
            name: self.name,
            tradition: self.tradition,
            concept: self.concept,
            essence: self.essence,
            nature: self.nature,
            demeanor: self.demeanor,
            arete: self.arete,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::character::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
            tradition: entity.tradition,
            concept: entity.concept,
            essence: entity.essence,
            nature: entity.nature,
            demeanor: entity.demeanor,
            arete: entity.arete,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a character for a specific user.
#[derive(Debug, Clone, PartialEq)]
pub struct CreateCharacterParams {
    pub user_id: i32,
    pub name: String,
    pub tradition: String,
    pub concept: Option<String>,
    pub essence: Option<String>,
    pub nature: Option<String>,
    pub demeanor: Option<String>,
    pub arete: i32,
}

impl CreateCharacterParams {
    /// Validates a creation DTO for the signed-in user.
    ///
    /// # Arguments
    /// - `user_id` - ID of the session user who will own the character
    /// - `dto` - Submitted form data; `name` and `tradition` are required
    pub fn from_dto(user_id: i32, dto: CreateCharacterDto) -> Result<Self, AppError> {
        Ok(Self {
            user_id,
            name: required_text(dto.name, "name")?,
            tradition: required_text(dto.tradition, "tradition")?,
            concept: optional_text(dto.concept),
            essence: optional_text(dto.essence),
            nature: optional_text(dto.nature),
            demeanor: optional_text(dto.demeanor),
            arete: dto.arete.unwrap_or(DEFAULT_ARETE),
        })
    }
}
