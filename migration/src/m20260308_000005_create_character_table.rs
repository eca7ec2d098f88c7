use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(integer(Character::UserId))
                    .col(string(Character::Name))
                    .col(string(Character::Tradition))
                    .col(string_null(Character::Concept))
                    .col(string_null(Character::Essence))
                    .col(string_null(Character::Nature))
                    .col(string_null(Character::Demeanor))
                    .col(integer(Character::Arete).default(1))
                    .col(timestamp_with_time_zone(Character::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_character_user_id")
                            .from(Character::Table, Character::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    UserId,
    Name,
    Tradition,
    Concept,
    Essence,
    Nature,
    Demeanor,
    Arete,
    CreatedAt,
}
