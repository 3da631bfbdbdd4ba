use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sector::Table)
                    .if_not_exists()
                    .col(pk_auto(Sector::Id))
                    .col(string(Sector::Name))
                    .col(string(Sector::NameSearch))
                    .col(timestamp_with_time_zone(Sector::CreatedAt))
                    .col(timestamp_with_time_zone(Sector::UpdatedAt))
                    .col(boolean(Sector::Active).default(true))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sector::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Sector {
    Table,
    Id,
    Name,
    NameSearch,
    CreatedAt,
    UpdatedAt,
    Active,
}
