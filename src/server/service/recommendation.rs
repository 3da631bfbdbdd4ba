//! Category-overlap recommendations for shoppers.
//!
//! A store or product is recommended when it carries at least one of the shopper's
//! desired categories. Results are deduplicated and ordered by id; there is no
//! ranking beyond that.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{product::ProductRepository, shopper::ShopperRepository, store::StoreRepository},
    error::AppError,
    model::{product::Product, store::Store},
    service::{product::ProductService, store::StoreService},
};

pub struct RecommendationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RecommendationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores sharing a category with the shopper's desired categories.
    ///
    /// Returns an empty list when the shopper has no desired categories.
    pub async fn stores_for(&self, shopper_id: i32) -> Result<Vec<Store>, AppError> {
        let desired = ShopperRepository::new(self.db)
            .desired_category_ids(shopper_id)
            .await?;
        let stores = StoreRepository::new(self.db)
            .find_by_category_ids(desired)
            .await?;
        StoreService::new(self.db).assemble(stores).await
    }

    /// Products sharing a category with the shopper's desired categories.
    pub async fn products_for(&self, shopper_id: i32) -> Result<Vec<Product>, AppError> {
        let desired = ShopperRepository::new(self.db)
            .desired_category_ids(shopper_id)
            .await?;
        let products = ProductRepository::new(self.db)
            .find_by_category_ids(desired)
            .await?;
        ProductService::new(self.db).assemble(products).await
    }
}
