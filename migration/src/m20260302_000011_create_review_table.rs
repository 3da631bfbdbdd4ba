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
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::ShopperId))
                    .col(integer(Review::StoreId))
                    .col(double(Review::Rating))
                    .col(text_null(Review::Comment))
                    .col(timestamp_with_time_zone(Review::CreatedAt))
                    .col(timestamp_with_time_zone(Review::UpdatedAt))
                    .col(boolean(Review::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_shopper_id")
                            .from(Review::Table, Review::ShopperId)
                            .to(Shopper::Table, Shopper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_store_id")
                            .from(Review::Table, Review::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_store_id")
                    .table(Review::Table)
                    .col(Review::StoreId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    ShopperId,
    StoreId,
    Rating,
    Comment,
    CreatedAt,
    UpdatedAt,
    Active,
}
