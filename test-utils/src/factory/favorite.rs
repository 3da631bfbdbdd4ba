//! Favorite factories for product and store favorites.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts an active favorite-product row.
pub async fn create_favorite_product(
    db: &DatabaseConnection,
    shopper_id: i32,
    product_id: i32,
) -> Result<entity::favorite_product::Model, DbErr> {
    let now = Utc::now();
    entity::favorite_product::ActiveModel {
        shopper_id: ActiveValue::Set(shopper_id),
        product_id: ActiveValue::Set(product_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts an active favorite-store row.
pub async fn create_favorite_store(
    db: &DatabaseConnection,
    shopper_id: i32,
    store_id: i32,
) -> Result<entity::favorite_store::Model, DbErr> {
    let now = Utc::now();
    entity::favorite_store::ActiveModel {
        shopper_id: ActiveValue::Set(shopper_id),
        store_id: ActiveValue::Set(store_id),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        active: ActiveValue::Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
}
