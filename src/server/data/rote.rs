//! Rote data repository for database operations.

use chrono::Utc;
use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::rote::{CreateRoteParams, Rote, RoteFilter};

const LIKE_ESCAPE: char = '\\';

/// Escapes `LIKE` wildcards so the value only ever matches literally.
fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Repository providing database operations for the rote catalogue.
pub struct RoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a rote, stamping it with the current time.
    ///
    /// # Returns
    /// - `Ok(Rote)` - The created rote including its generated ID
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRoteParams) -> Result<Rote, DbErr> {
        let entity = Self::active_model(params).insert(self.db).await?;

        Ok(Rote::from_entity(entity))
    }

    /// Inserts several rotes in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rotes inserted (0 for an empty input)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<CreateRoteParams>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let count = params.len() as u64;
        let models = params.into_iter().map(Self::active_model);

        entity::prelude::Rote::insert_many(models)
            .exec(self.db)
            .await?;

        Ok(count)
    }

    /// Gets all rotes matching the filter, ordered by name.
    pub async fn get_all(&self, filter: RoteFilter) -> Result<Vec<Rote>, DbErr> {
        let mut query = entity::prelude::Rote::find();

        if let Some(tradition) = filter.tradition {
            query = query.filter(entity::rote::Column::Tradition.eq(tradition));
        }

        if let Some(sphere) = filter.sphere {
            let pattern = format!("%{}%", escape_like(&sphere));
            query = query.filter(
                entity::rote::Column::Spheres.like(LikeExpr::new(pattern).escape(LIKE_ESCAPE)),
            );
        }

        let entities = query
            .order_by_asc(entity::rote::Column::Name)
            .order_by_asc(entity::rote::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Rote::from_entity).collect())
    }

    /// Counts all rotes.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Rote::find().count(self.db).await
    }

    /// Deletes every rote.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_all(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::Rote::delete_many().exec(self.db).await?;

        Ok(result.rows_affected)
    }

    fn active_model(params: CreateRoteParams) -> entity::rote::ActiveModel {
        entity::rote::ActiveModel {
            name: ActiveValue::Set(params.name),
            tradition: ActiveValue::Set(params.tradition),
            description: ActiveValue::Set(params.description),
            spheres: ActiveValue::Set(params.spheres),
            level: ActiveValue::Set(params.level),
            page: ActiveValue::Set(params.page),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
    }
}
