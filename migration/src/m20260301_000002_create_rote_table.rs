use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rote::Table)
                    .if_not_exists()
                    .col(pk_auto(Rote::Id))
                    .col(string(Rote::Name))
                    .col(string(Rote::Tradition))
                    .col(text(Rote::Description))
                    .col(string(Rote::Spheres))
                    .col(integer(Rote::Level))
                    .col(string_null(Rote::Page))
                    .col(timestamp_with_time_zone(Rote::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rote_name")
                    .table(Rote::Table)
                    .col(Rote::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rote::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rote {
    Table,
    Id,
    Name,
    Tradition,
    Description,
    Spheres,
    Level,
    Page,
    CreatedAt,
}
