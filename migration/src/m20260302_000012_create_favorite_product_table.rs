use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000005_create_shopper_table::Shopper, m20260302_000009_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteProduct::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteProduct::Id))
                    .col(integer(FavoriteProduct::ShopperId))
                    .col(integer(FavoriteProduct::ProductId))
                    .col(timestamp_with_time_zone(FavoriteProduct::CreatedAt))
                    .col(timestamp_with_time_zone(FavoriteProduct::UpdatedAt))
                    .col(boolean(FavoriteProduct::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_product_shopper_id")
                            .from(FavoriteProduct::Table, FavoriteProduct::ShopperId)
                            .to(Shopper::Table, Shopper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_favorite_product_product_id")
                            .from(FavoriteProduct::Table, FavoriteProduct::ProductId)
                            .to(Product::Table, Product::Id)
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
                    .name("idx_favorite_product_shopper_product")
                    .table(FavoriteProduct::Table)
                    .col(FavoriteProduct::ShopperId)
                    .col(FavoriteProduct::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FavoriteProduct::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FavoriteProduct {
    Table,
    Id,
    ShopperId,
    ProductId,
    CreatedAt,
    UpdatedAt,
    Active,
}
