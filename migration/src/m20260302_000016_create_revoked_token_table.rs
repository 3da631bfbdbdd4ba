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
                    .table(RevokedToken::Table)
                    .if_not_exists()
                    .col(string(RevokedToken::Jti).primary_key())
                    .col(integer(RevokedToken::AccountId))
                    .col(timestamp_with_time_zone(RevokedToken::ExpiresAt))
                    .col(timestamp_with_time_zone(RevokedToken::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_revoked_token_account_id")
                            .from(RevokedToken::Table, RevokedToken::AccountId)
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
            .drop_table(Table::drop().table(RevokedToken::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RevokedToken {
    Table,
    Jti,
    AccountId,
    ExpiresAt,
    CreatedAt,
}
