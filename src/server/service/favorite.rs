//! Favorite products and stores.
//!
//! A shopper can favorite a given product or store at most once. The check here
//! covers the common case; the unique index covers concurrent requests, and a
//! unique violation from it is reported the same way.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::server::{
    data::favorite::{FavoriteProductRepository, FavoriteStoreRepository},
    error::AppError,
    model::favorite::{FavoriteProduct, FavoriteStore},
    service::{product::ProductService, shopper::ShopperService, store::StoreService},
};

const ALREADY_FAVORITED: &str = "Already in favorites.";

pub struct FavoriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a product to a shopper's favorites.
    ///
    /// # Returns
    /// - `Ok(FavoriteProduct)` - The new favorite row
    /// - `Err(AppError::Validation)` - Unknown shopper or product, or already favorited
    pub async fn add_product(
        &self,
        shopper_id: i32,
        product_id: i32,
    ) -> Result<FavoriteProduct, AppError> {
        ShopperService::new(self.db)
            .ensure_exists("cliente", shopper_id)
            .await?;
        ProductService::new(self.db)
            .ensure_exists("produto", product_id)
            .await?;

        let repo = FavoriteProductRepository::new(self.db);
        if repo
            .find_by_shopper_and_product(shopper_id, product_id)
            .await?
            .is_some()
        {
            return Err(AppError::field("produto", "unique", ALREADY_FAVORITED));
        }

        let favorite = repo
            .create(shopper_id, product_id)
            .await
            .map_err(|e| already_favorited(e, "produto"))?;
        Ok(FavoriteProduct::from_entity(favorite))
    }

    /// Lists favorite-product rows, optionally of one shopper only.
    pub async fn get_products(&self, shopper_id: Option<i32>) -> Result<Vec<FavoriteProduct>, AppError> {
        let favorites = FavoriteProductRepository::new(self.db)
            .find_all(shopper_id)
            .await?;
        Ok(favorites
            .into_iter()
            .map(FavoriteProduct::from_entity)
            .collect())
    }

    pub async fn get_product(&self, id: i32) -> Result<Option<FavoriteProduct>, AppError> {
        let favorite = FavoriteProductRepository::new(self.db).find_by_id(id).await?;
        Ok(favorite.map(FavoriteProduct::from_entity))
    }

    pub async fn delete_product(&self, id: i32) -> Result<bool, AppError> {
        Ok(FavoriteProductRepository::new(self.db).delete(id).await?)
    }

    /// Removes a product from a shopper's favorites.
    ///
    /// # Returns
    /// - `Ok(true)` - Favorite removed
    /// - `Ok(false)` - The product was not among the shopper's favorites
    pub async fn remove_product(&self, shopper_id: i32, product_id: i32) -> Result<bool, AppError> {
        let repo = FavoriteProductRepository::new(self.db);
        let Some(favorite) = repo
            .find_by_shopper_and_product(shopper_id, product_id)
            .await?
        else {
            return Ok(false);
        };
        Ok(repo.delete(favorite.id).await?)
    }

    /// Adds a store to a shopper's favorites.
    pub async fn add_store(&self, shopper_id: i32, store_id: i32) -> Result<FavoriteStore, AppError> {
        ShopperService::new(self.db)
            .ensure_exists("cliente", shopper_id)
            .await?;
        StoreService::new(self.db)
            .ensure_exists("loja", store_id)
            .await?;

        let repo = FavoriteStoreRepository::new(self.db);
        if repo
            .find_by_shopper_and_store(shopper_id, store_id)
            .await?
            .is_some()
        {
            return Err(AppError::field("loja", "unique", ALREADY_FAVORITED));
        }

        let favorite = repo
            .create(shopper_id, store_id)
            .await
            .map_err(|e| already_favorited(e, "loja"))?;
        Ok(FavoriteStore::from_entity(favorite))
    }

    pub async fn get_stores(&self, shopper_id: Option<i32>) -> Result<Vec<FavoriteStore>, AppError> {
        let favorites = FavoriteStoreRepository::new(self.db)
            .find_all(shopper_id)
            .await?;
        Ok(favorites.into_iter().map(FavoriteStore::from_entity).collect())
    }

    pub async fn get_store(&self, id: i32) -> Result<Option<FavoriteStore>, AppError> {
        let favorite = FavoriteStoreRepository::new(self.db).find_by_id(id).await?;
        Ok(favorite.map(FavoriteStore::from_entity))
    }

    pub async fn delete_store(&self, id: i32) -> Result<bool, AppError> {
        Ok(FavoriteStoreRepository::new(self.db).delete(id).await?)
    }

    pub async fn remove_store(&self, shopper_id: i32, store_id: i32) -> Result<bool, AppError> {
        let repo = FavoriteStoreRepository::new(self.db);
        let Some(favorite) = repo.find_by_shopper_and_store(shopper_id, store_id).await? else {
            return Ok(false);
        };
        Ok(repo.delete(favorite.id).await?)
    }
}

fn already_favorited(err: DbErr, field: &'static str) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            AppError::field(field, "unique", ALREADY_FAVORITED)
        }
        _ => err.into(),
    }
}
