use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000003_create_sector_table::Sector,
    m20260302_000004_create_store_owner_table::StoreOwner,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Store::Table)
                    .if_not_exists()
                    .col(pk_auto(Store::Id))
                    .col(integer(Store::OwnerId))
                    .col(integer_null(Store::SectorId))
                    .col(string(Store::Name))
                    .col(string(Store::NameSearch))
                    .col(text(Store::Description))
                    .col(string_null(Store::Banner))
                    .col(string_null(Store::Logo))
                    .col(string_null(Store::Photo))
                    .col(string(Store::Location))
                    .col(string(Store::OpeningHours))
                    .col(text_null(Store::SocialLinks))
                    .col(timestamp_with_time_zone(Store::CreatedAt))
                    .col(timestamp_with_time_zone(Store::UpdatedAt))
                    .col(boolean(Store::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_owner_id")
                            .from(Store::Table, Store::OwnerId)
                            .to(StoreOwner::Table, StoreOwner::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_sector_id")
                            .from(Store::Table, Store::SectorId)
                            .to(Sector::Table, Sector::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Store::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Store {
    Table,
    Id,
    OwnerId,
    SectorId,
    Name,
    NameSearch,
    Description,
    Banner,
    Logo,
    Photo,
    Location,
    OpeningHours,
    SocialLinks,
    CreatedAt,
    UpdatedAt,
    Active,
}
