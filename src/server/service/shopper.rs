use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        account::AccountRepository,
        favorite::{FavoriteProductRepository, FavoriteStoreRepository},
        shopper::ShopperRepository,
    },
    error::AppError,
    model::{
        category::Category,
        product::Product,
        shopper::{Shopper, UpdateShopperParams},
        store::Store,
    },
    service::{category::CategoryService, product::ProductService, store::StoreService},
};

pub struct ShopperService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShopperService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves email, desired categories and favorites for each shopper row.
    ///
    /// Favorites are embedded as full products and stores, so this issues a handful
    /// of queries per shopper.
    pub async fn assemble(
        &self,
        shoppers: Vec<entity::shopper::Model>,
    ) -> Result<Vec<Shopper>, AppError> {
        let account_ids = shoppers.iter().map(|s| s.account_id).collect();
        let accounts = AccountRepository::new(self.db)
            .find_by_ids(account_ids)
            .await?;

        let shopper_repo = ShopperRepository::new(self.db);
        let favorite_products = FavoriteProductRepository::new(self.db);
        let favorite_stores = FavoriteStoreRepository::new(self.db);
        let product_service = ProductService::new(self.db);
        let store_service = StoreService::new(self.db);

        let mut result = Vec::with_capacity(shoppers.len());
        for shopper in shoppers {
            let email = accounts
                .iter()
                .find(|a| a.id == shopper.account_id)
                .map(|a| a.email.clone())
                .unwrap_or_default();
            let desired = shopper_repo.desired_category_ids(shopper.id).await?;
            let products = product_service
                .get_by_ids(favorite_products.product_ids_for_shopper(shopper.id).await?)
                .await?;
            let stores = store_service
                .get_by_ids(favorite_stores.store_ids_for_shopper(shopper.id).await?)
                .await?;

            result.push(Shopper::from_entity(shopper, email, desired, products, stores));
        }

        Ok(result)
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Shopper>, AppError> {
        let shoppers = ShopperRepository::new(self.db).find_all(name).await?;
        self.assemble(shoppers).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Shopper>, AppError> {
        let Some(shopper) = ShopperRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![shopper]).await?.pop())
    }

    pub async fn get_by_account_id(&self, account_id: i32) -> Result<Option<Shopper>, AppError> {
        let Some(shopper) = ShopperRepository::new(self.db)
            .find_by_account_id(account_id)
            .await?
        else {
            return Ok(None);
        };
        Ok(self.assemble(vec![shopper]).await?.pop())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateShopperParams,
    ) -> Result<Option<Shopper>, AppError> {
        if let Some(category_ids) = &params.desired_category_ids {
            CategoryService::new(self.db)
                .ensure_exist("categorias_desejadas", category_ids)
                .await?;
        }

        let Some(shopper) = ShopperRepository::new(self.db).update(id, params).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![shopper]).await?.pop())
    }

    /// Deletes the shopper together with its account.
    ///
    /// Reviews and favorites cascade from the shopper row.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let Some(shopper) = ShopperRepository::new(self.db).find_by_id(id).await? else {
            return Ok(false);
        };
        Ok(AccountRepository::new(self.db)
            .delete(shopper.account_id)
            .await?)
    }

    pub async fn desired_categories(&self, id: i32) -> Result<Vec<Category>, AppError> {
        self.require(id).await?;
        let category_ids = ShopperRepository::new(self.db)
            .desired_category_ids(id)
            .await?;
        CategoryService::new(self.db).get_by_ids(category_ids).await
    }

    pub async fn favorite_products(&self, id: i32) -> Result<Vec<Product>, AppError> {
        self.require(id).await?;
        let product_ids = FavoriteProductRepository::new(self.db)
            .product_ids_for_shopper(id)
            .await?;
        ProductService::new(self.db).get_by_ids(product_ids).await
    }

    pub async fn favorite_stores(&self, id: i32) -> Result<Vec<Store>, AppError> {
        self.require(id).await?;
        let store_ids = FavoriteStoreRepository::new(self.db)
            .store_ids_for_shopper(id)
            .await?;
        StoreService::new(self.db).get_by_ids(store_ids).await
    }

    /// Gets one favorited product of the shopper.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Shopper missing, or the product is not among their favorites
    pub async fn favorite_product(&self, id: i32, product_id: i32) -> Result<Product, AppError> {
        let favorites = self.favorite_products(id).await?;
        favorites
            .into_iter()
            .find(|p| p.id == product_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Product {} is not a favorite of shopper {}",
                    product_id, id
                ))
            })
    }

    pub async fn favorite_store(&self, id: i32, store_id: i32) -> Result<Store, AppError> {
        let favorites = self.favorite_stores(id).await?;
        favorites
            .into_iter()
            .find(|s| s.id == store_id)
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "Store {} is not a favorite of shopper {}",
                    store_id, id
                ))
            })
    }

    pub async fn ensure_exists(&self, field: &'static str, id: i32) -> Result<(), AppError> {
        if ShopperRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::missing_reference(field, id));
        }
        Ok(())
    }

    async fn require(&self, id: i32) -> Result<entity::shopper::Model, AppError> {
        ShopperRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Shopper {} not found", id)))
    }
}
