use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        category::CategoryRepository, product::ProductRepository, sector::SectorRepository,
        store::StoreRepository,
    },
    error::AppError,
    model::{
        category::{Category, CreateCategoryParams, UpdateCategoryParams},
        product::Product,
        sector::Sector,
        store::Store,
    },
    service::{product::ProductService, store::StoreService},
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateCategoryParams) -> Result<Category, AppError> {
        let category = CategoryRepository::new(self.db).create(params).await?;
        Ok(Category::from_entity(category))
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).find_all(name).await?;
        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Category>, AppError> {
        let category = CategoryRepository::new(self.db).find_by_id(id).await?;
        Ok(category.map(Category::from_entity))
    }

    /// Returns the given categories ordered by id, skipping unknown ids.
    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Category>, AppError> {
        let categories = CategoryRepository::new(self.db).find_by_ids(ids).await?;
        Ok(categories.into_iter().map(Category::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<Category>, AppError> {
        let category = CategoryRepository::new(self.db).update(id, params).await?;
        Ok(category.map(Category::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(CategoryRepository::new(self.db).delete(id).await?)
    }

    /// Stores tagged with the category.
    ///
    /// # Returns
    /// - `Ok(Vec<Store>)` - Tagged stores ordered by id
    /// - `Err(AppError::NotFound)` - Category does not exist
    pub async fn stores(&self, id: i32) -> Result<Vec<Store>, AppError> {
        self.require(id).await?;
        let stores = StoreRepository::new(self.db)
            .find_by_category_ids(vec![id])
            .await?;
        StoreService::new(self.db).assemble(stores).await
    }

    /// Products tagged with the category.
    pub async fn products(&self, id: i32) -> Result<Vec<Product>, AppError> {
        self.require(id).await?;
        let products = ProductRepository::new(self.db)
            .find_by_category_ids(vec![id])
            .await?;
        ProductService::new(self.db).assemble(products).await
    }

    /// Sectors that contain at least one store tagged with the category.
    pub async fn sectors(&self, id: i32) -> Result<Vec<Sector>, AppError> {
        self.require(id).await?;
        let stores = StoreRepository::new(self.db)
            .find_by_category_ids(vec![id])
            .await?;

        let mut sector_ids: Vec<i32> = stores.iter().filter_map(|s| s.sector_id).collect();
        sector_ids.sort_unstable();
        sector_ids.dedup();

        let sectors = SectorRepository::new(self.db).find_by_ids(sector_ids).await?;
        Ok(sectors.into_iter().map(Sector::from_entity).collect())
    }

    /// Fails with a field validation error unless every id names an existing category.
    ///
    /// # Arguments
    /// - `field` - Wire name of the field the ids came from, used in the error body
    /// - `ids` - Category ids to check; duplicates are allowed
    pub async fn ensure_exist(&self, field: &'static str, ids: &[i32]) -> Result<(), AppError> {
        if ids.is_empty() {
            return Ok(());
        }

        let mut wanted = ids.to_vec();
        wanted.sort_unstable();
        wanted.dedup();

        let found = CategoryRepository::new(self.db)
            .find_by_ids(wanted.clone())
            .await?;

        if let Some(missing) = wanted.iter().find(|id| !found.iter().any(|c| c.id == **id)) {
            return Err(AppError::missing_reference(field, *missing));
        }

        Ok(())
    }

    async fn require(&self, id: i32) -> Result<entity::category::Model, AppError> {
        CategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Category {} not found", id)))
    }
}
