use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000007_create_store_table::Store;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(integer(Product::StoreId))
                    .col(string(Product::Name))
                    .col(string(Product::NameSearch))
                    .col(text(Product::Description))
                    .col(string_null(Product::Image))
                    .col(string_len(Product::Color, 50))
                    .col(text(Product::Composition))
                    .col(timestamp_with_time_zone(Product::CreatedAt))
                    .col(timestamp_with_time_zone(Product::UpdatedAt))
                    .col(boolean(Product::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_store_id")
                            .from(Product::Table, Product::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    StoreId,
    Name,
    NameSearch,
    Description,
    Image,
    Color,
    Composition,
    CreatedAt,
    UpdatedAt,
    Active,
}
