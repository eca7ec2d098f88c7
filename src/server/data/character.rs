//! Character data repository for database operations.
//!
//! Every query is scoped to the owning user so one user can never read or delete
//! another user's characters.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::character::{Character, CreateCharacterParams};

pub struct CharacterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a character owned by `params.user_id`.
    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, DbErr> {
        let entity = entity::character::ActiveModel {
            user_id: ActiveValue::Set(params.user_id),
            name: ActiveValue::Set(params.name),
            tradition: ActiveValue::Set(params.tradition),
            concept: ActiveValue::Set(params.concept),
            essence: ActiveValue::Set(params.essence),
            nature: ActiveValue::Set(params.nature),
            demeanor: ActiveValue::Set(params.demeanor),
            arete: ActiveValue::Set(params.arete),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Character::from_entity(entity))
    }

    /// Gets a user's characters, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Character>, DbErr> {
        let entities = entity::prelude::Character::find()
            .filter(entity::character::Column::UserId.eq(user_id))
            .order_by_desc(entity::character::Column::CreatedAt)
            .order_by_desc(entity::character::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Character::from_entity).collect())
    }

    /// Deletes a character if it belongs to the user.
    ///
    /// # Returns
    /// - `Ok(true)` - Character deleted
    /// - `Ok(false)` - No character with that ID owned by the user
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_owned(&self, id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Character::delete_many()
            .filter(entity::character::Column::Id.eq(id))
            .filter(entity::character::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
