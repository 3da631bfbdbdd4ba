//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers (emails, names) across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a store owner and one store belonging to them.
///
/// # Returns
/// - `Ok((owner, store))` - The created owner and store entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_store_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::store_owner::Model, entity::store::Model), DbErr> {
    let owner = super::store_owner::create_store_owner(db).await?;
    let store = super::store::create_store(db, owner.id).await?;

    Ok((owner, store))
}

/// Tags a store with a category through the join table.
pub async fn tag_store(db: &DatabaseConnection, store_id: i32, category_id: i32) -> Result<(), DbErr> {
    entity::store_category::ActiveModel {
        store_id: ActiveValue::Set(store_id),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Tags a product with a category through the join table.
pub async fn tag_product(
    db: &DatabaseConnection,
    product_id: i32,
    category_id: i32,
) -> Result<(), DbErr> {
    entity::product_category::ActiveModel {
        product_id: ActiveValue::Set(product_id),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await?;
    Ok(())
}

/// Adds a category to a shopper's desired categories.
pub async fn desire_category(
    db: &DatabaseConnection,
    shopper_id: i32,
    category_id: i32,
) -> Result<(), DbErr> {
    entity::shopper_category::ActiveModel {
        shopper_id: ActiveValue::Set(shopper_id),
        category_id: ActiveValue::Set(category_id),
    }
    .insert(db)
    .await?;
    Ok(())
}
