use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000002_create_category_table::Category;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(KioskSurvey::Table)
                    .if_not_exists()
                    .col(pk_auto(KioskSurvey::Id))
                    .col(string_len(KioskSurvey::VisitorKind, 20))
                    .col(string_len(KioskSurvey::AgeRange, 10))
                    .col(string_len(KioskSurvey::Gender, 50))
                    .col(integer_null(KioskSurvey::CategoryId))
                    .col(timestamp_with_time_zone(KioskSurvey::CreatedAt))
                    .col(timestamp_with_time_zone(KioskSurvey::UpdatedAt))
                    .col(boolean(KioskSurvey::Active).default(true))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_kiosk_survey_category_id")
                            .from(KioskSurvey::Table, KioskSurvey::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KioskSurvey::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum KioskSurvey {
    Table,
    Id,
    VisitorKind,
    AgeRange,
    Gender,
    CategoryId,
    CreatedAt,
    UpdatedAt,
    Active,
}
