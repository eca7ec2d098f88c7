use sea_orm::DatabaseConnection;

use crate::server::{
    data::character::CharacterRepository,
    error::AppError,
    model::character::{Character, CreateCharacterParams},
};

/// Service for characters owned by signed-in users.
///
/// Every method is scoped to a single user; callers pass the ID of the session user.
pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CharacterService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCharacterParams) -> Result<Character, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.create(params).await?)
    }

    /// Lists the user's characters, newest first
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<Character>, AppError> {
        let repo = CharacterRepository::new(self.db);

        Ok(repo.get_by_user(user_id).await?)
    }

    /// Deletes a character owned by the user.
    ///
    /// # Returns
    /// - `Ok(())` - Character deleted
    /// - `Err(AppError::NotFound)` - No such character, or it belongs to another user
    /// - `Err(AppError::DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32, user_id: i32) -> Result<(), AppError> {
        let repo = CharacterRepository::new(self.db);

        if !repo.delete_owned(id, user_id).await? {
            return Err(AppError::NotFound("Character not found".to_string()));
        }

        Ok(())
    }
}
