use sea_orm_migration::{prelude::*, schema::*};

use super::{m20260302_000002_create_category_table::Category, m20260302_000005_create_shopper_table::Shopper};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ShopperCategory::Table)
                    .if_not_exists()
                    .col(integer(ShopperCategory::ShopperId))
                    .col(integer(ShopperCategory::CategoryId))
                    .primary_key(
                        Index::create()
                            .col(ShopperCategory::ShopperId)
                            .col(ShopperCategory::CategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopper_category_shopper_id")
                            .from(ShopperCategory::Table, ShopperCategory::ShopperId)
                            .to(Shopper::Table, Shopper::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopper_category_category_id")
                            .from(ShopperCategory::Table, ShopperCategory::CategoryId)
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
            .drop_table(Table::drop().table(ShopperCategory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ShopperCategory {
    Table,
    ShopperId,
    CategoryId,
}
