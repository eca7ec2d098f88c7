use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Resource::Table)
                    .if_not_exists()
                    .col(pk_auto(Resource::Id))
                    .col(string(Resource::Name))
                    .col(string(Resource::ResourceType))
                    .col(string(Resource::Category))
                    .col(text(Resource::Description))
                    .col(string(Resource::Url))
                    .col(string_null(Resource::Author))
                    .col(string_null(Resource::ImageUrl))
                    .col(boolean(Resource::Featured).default(false))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Resource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Resource {
    Table,
    Id,
    Name,
    #[sea_orm(iden = "type")]
    ResourceType,
    Category,
    Description,
    Url,
    Author,
    ImageUrl,
    Featured,
}
