use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000001_create_account_table::Account;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StoreOwner::Table)
                    .if_not_exists()
                    .col(pk_auto(StoreOwner::Id))
                    .col(integer_uniq(StoreOwner::AccountId))
                    .col(string(StoreOwner::Name))
                    .col(string(StoreOwner::NameSearch))
                    .col(string_len(StoreOwner::Phone, 20))
                    .col(string_len(StoreOwner::TaxId, 20))
                    .col(string_null(StoreOwner::Photo))
                    .col(timestamp_with_time_zone(StoreOwner::CreatedAt))
                    .col(timestamp_with_time_zone(StoreOwner::UpdatedAt))
                    .col(boolean(StoreOwner::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_store_owner_account_id")
                            .from(StoreOwner::Table, StoreOwner::AccountId)
                            .to(Account::Table, Account::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StoreOwner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StoreOwner {
    Table,
    Id,
    AccountId,
    Name,
    NameSearch,
    Phone,
    TaxId,
    Photo,
    CreatedAt,
    UpdatedAt,
    Active,
}
