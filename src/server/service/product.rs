use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{favorite::FavoriteProductRepository, product::ProductRepository},
    error::{internal::InternalError, AppError},
    model::{
        category::Category,
        favorite::FavoriteProduct,
        product::{CreateProductParams, Product, UpdateProductParams},
        store::Store,
    },
    service::{category::CategoryService, store::StoreService},
};

pub struct ProductService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Turns product rows into domain models with their category ids.
    pub async fn assemble(
        &self,
        products: Vec<entity::product::Model>,
    ) -> Result<Vec<Product>, AppError> {
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut category_ids = ProductRepository::new(self.db).category_ids_for(ids).await?;

        Ok(products
            .into_iter()
            .map(|product| {
                let categories = category_ids.remove(&product.id).unwrap_or_default();
                Product::from_entity(product, categories)
            })
            .collect())
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Product>, AppError> {
        let products = ProductRepository::new(self.db).find_all(name).await?;
        self.assemble(products).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        let Some(product) = ProductRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![product]).await?.pop())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Product>, AppError> {
        let products = ProductRepository::new(self.db).find_by_ids(ids).await?;
        self.assemble(products).await
    }

    /// Creates a product after checking its store and categories exist.
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        StoreService::new(self.db)
            .ensure_exists("loja", params.store_id)
            .await?;
        CategoryService::new(self.db)
            .ensure_exist("categorias", &params.category_ids)
            .await?;

        let txn = self.db.begin().await?;
        let product = ProductRepository::new(&txn).create(params).await?;
        txn.commit().await?;
        let id = product.id;

        self.assemble(vec![product])
            .await?
            .pop()
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "product", id }.into())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<Product>, AppError> {
        if let Some(store_id) = params.store_id {
            StoreService::new(self.db)
                .ensure_exists("loja", store_id)
                .await?;
        }
        if let Some(category_ids) = &params.category_ids {
            CategoryService::new(self.db)
                .ensure_exist("categorias", category_ids)
                .await?;
        }

        let txn = self.db.begin().await?;
        let updated = ProductRepository::new(&txn).update(id, params).await?;
        txn.commit().await?;

        let Some(product) = updated else {
            return Ok(None);
        };
        Ok(self.assemble(vec![product]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(ProductRepository::new(self.db).delete(id).await?)
    }

    /// The store carrying the product, as a one-element list.
    pub async fn stores(&self, id: i32) -> Result<Vec<Store>, AppError> {
        let product = self.require(id).await?;
        StoreService::new(self.db)
            .get_by_ids(vec![product.store_id])
            .await
    }

    pub async fn categories(&self, id: i32) -> Result<Vec<Category>, AppError> {
        self.require(id).await?;
        let category_ids = ProductRepository::new(self.db)
            .category_ids_for(vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();
        CategoryService::new(self.db).get_by_ids(category_ids).await
    }

    /// Favorite-product rows pointing at the product.
    pub async fn favorites(&self, id: i32) -> Result<Vec<FavoriteProduct>, AppError> {
        self.require(id).await?;
        let favorites = FavoriteProductRepository::new(self.db)
            .find_by_product(id)
            .await?;
        Ok(favorites
            .into_iter()
            .map(FavoriteProduct::from_entity)
            .collect())
    }

    pub async fn ensure_exists(&self, field: &'static str, id: i32) -> Result<(), AppError> {
        if ProductRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::missing_reference(field, id));
        }
        Ok(())
    }

    async fn require(&self, id: i32) -> Result<entity::product::Model, AppError> {
        ProductRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", id)))
    }
}
