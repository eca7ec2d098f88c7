use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Background::Table)
                    .if_not_exists()
                    .col(pk_auto(Background::Id))
                    .col(string(Background::Name))
                    .col(string(Background::Category))
                    .col(string(Background::Subtype))
                    .col(integer(Background::Cost))
                    .col(text(Background::Description))
                    .col(string_null(Background::Page))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Background::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Background {
    Table,
    Id,
    Name,
    Category,
    Subtype,
    Cost,
    Description,
    Page,
}
