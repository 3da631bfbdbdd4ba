use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260302_000002_create_category_table::Category, m20260302_000007_create_store_table::Store};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreCategory::Table)
                    .if_not_exists()
                    .col(integer(StoreCategory::StoreId))
                    .col(integer(StoreCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(StoreCategory::StoreId)
                            .col(StoreCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_category_store_id")
                            .from(StoreCategory::Table, StoreCategory::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_category_category_id")
                            .from(StoreCategory::Table, StoreCategory::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoreCategory {
    Table,
    StoreId,
    CategoryId,
}
