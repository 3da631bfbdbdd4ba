use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260302_000001_create_account_table::Account, m20260302_000007_create_store_table::Store,
    m20260302_000009_create_product_table::Product,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAction::Table)
                    .if_not_exists()
                    .col(pk_auto(UserAction::Id))
                    .col(integer(UserAction::AccountId))
                    .col(string(UserAction::Action))
                    .col(integer_null(UserAction::StoreId))
                    .col(integer_null(UserAction::ProductId))
                    .col(text(UserAction::Detail))
                    .col(timestamp_with_time_zone(UserAction::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_action_account_id")
                            .from(UserAction::Table, UserAction::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_action_store_id")
                            .from(UserAction::Table, UserAction::StoreId)
                            .to(Store::Table, Store::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_action_product_id")
                            .from(UserAction::Table, UserAction::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAction::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserAction {
    Table,
    Id,
    AccountId,
    Action,
    StoreId,
    ProductId,
    Detail,
    CreatedAt,
}
