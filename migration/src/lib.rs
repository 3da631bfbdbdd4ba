pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_account_table;
mod m20260302_000002_create_category_table;
mod m20260302_000003_create_sector_table;
mod m20260302_000004_create_store_owner_table;
mod m20260302_000005_create_shopper_table;
mod m20260302_000006_create_shopper_category_table;
mod m20260302_000007_create_store_table;
mod m20260302_000008_create_store_category_table;
mod m20260302_000009_create_product_table;
mod m20260302_000010_create_product_category_table;
mod m20260302_000011_create_review_table;
mod m20260302_000012_create_favorite_product_table;
mod m20260302_000013_create_favorite_store_table;
mod m20260302_000014_create_kiosk_survey_table;
mod m20260302_000015_create_user_action_table;
mod m20260302_000016_create_revoked_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_account_table::Migration),
            Box::new(m20260302_000002_create_category_table::Migration),
            Box::new(m20260302_000003_create_sector_table::Migration),
            Box::new(m20260302_000004_create_store_owner_table::Migration),
            Box::new(m20260302_000005_create_shopper_table::Migration),
            Box::new(m20260302_000006_create_shopper_category_table::Migration),
            Box::new(m20260302_000007_create_store_table::Migration),
            Box::new(m20260302_000008_create_store_category_table::Migration),
            Box::new(m20260302_000009_create_product_table::Migration),
            Box::new(m20260302_000010_create_product_category_table::Migration),
            Box::new(m20260302_000011_create_review_table::Migration),
            Box::new(m20260302_000012_create_favorite_product_table::Migration),
            Box::new(m20260302_000013_create_favorite_store_table::Migration),
            Box::new(m20260302_000014_create_kiosk_survey_table::Migration),
            Box::new(m20260302_000015_create_user_action_table::Migration),
            Box::new(m20260302_000016_create_revoked_token_table::Migration),
        ]
    }
}
