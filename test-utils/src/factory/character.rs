//! Character factory for creating player characters owned by a test user.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test characters with customizable fields.
///
/// The owning user must already exist; create one with `factory::create_user` first.
pub struct CharacterFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    name: String,
    tradition: String,
    concept: Option<String>,
    arete: i32,
    created_at: DateTime<Utc>,
}

impl<'a> CharacterFactory<'a> {
    /// Creates a new CharacterFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Character {id}"`
    /// - tradition: `"Verbena"`
    /// - arete: `1`
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            name: format!("Character {}", id),
            tradition: "Verbena".to_string(),
            concept: None,
            arete: 1,
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

    pub fn concept(mut self, concept: impl Into<String>) -> Self {
        self.concept = Some(concept.into());
        self
    }

    pub fn arete(mut self, arete: i32) -> Self {
        self.arete = arete;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the character entity into the database.
    pub async fn build(self) -> Result<entity::character::Model, DbErr> {
        entity::character::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            name: ActiveValue::Set(self.name),
            tradition: ActiveValue::Set(self.tradition),
            concept: ActiveValue::Set(self.concept),
            essence: ActiveValue::Set(None),
            nature: ActiveValue::Set(None),
            demeanor: ActiveValue::Set(None),
            arete: ActiveValue::Set(self.arete),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a character with default values owned by `user_id`.
pub async fn create_character(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::character::Model, DbErr> {
    CharacterFactory::new(db, user_id).build().await
}
