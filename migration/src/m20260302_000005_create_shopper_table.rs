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
                    .table(Shopper::Table)
                    .if_not_exists()
                    .col(pk_auto(Shopper::Id))
                    .col(integer_uniq(Shopper::AccountId))
                    .col(string(Shopper::Name))
                    .col(string(Shopper::NameSearch))
                    .col(string_len(Shopper::Phone, 20))
                    .col(string_null(Shopper::Photo))
                    .col(string_len(Shopper::AgeRange, 10))
                    .col(string_len(Shopper::Gender, 50))
                    .col(string_len(Shopper::Kind, 20))
                    .col(timestamp_with_time_zone(Shopper::CreatedAt))
                    .col(timestamp_with_time_zone(Shopper::UpdatedAt))
                    .col(boolean(Shopper::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_shopper_account_id")
                            .from(Shopper::Table, Shopper::AccountId)
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
            .drop_table(Table::drop().table(Shopper::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Shopper {
    Table,
    Id,
    AccountId,
    Name,
    NameSearch,
    Phone,
    Photo,
    AgeRange,
    Gender,
    Kind,
    CreatedAt,
    UpdatedAt,
    Active,
}
