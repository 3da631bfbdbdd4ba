use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000005_create_shopper_table::Shopper, m20260302_000007_create_store_table::Store,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteStore::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteStore::Id))
                    .col(integer(FavoriteStore::ShopperId))
                    .col(integer(FavoriteStore::StoreId))
                    .col(timestamp_with_time_zone(FavoriteStore::CreatedAt))
                    .col(timestamp_with_time_zone(FavoriteStore::UpdatedAt))
                    .col(boolean(FavoriteStore::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_store_shopper_id")
                            .from(FavoriteStore::Table, FavoriteStore::ShopperId)
                            .to(Shopper::Table, Shopper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_store_store_id")
                            .from(FavoriteStore::Table, FavoriteStore::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One live favorite per shopper and target
        manager
            .create_index(
                Index::create()
                    .name("idx_favorite_store_shopper_store")
                    .table(FavoriteStore::Table)
                    .col(FavoriteStore::ShopperId)
                    .col(FavoriteStore::StoreId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteStore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteStore {
    Table,
    Id,
    ShopperId,
    StoreId,
    CreatedAt,
    UpdatedAt,
    Active,
}
