use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        favorite::FavoriteStoreRepository, product::ProductRepository,
        review::ReviewRepository, store::StoreRepository, store_owner::StoreOwnerRepository,
        user_action::UserActionRepository,
    },
    error::{internal::InternalError, AppError},
    model::{
        category::Category,
        favorite::FavoriteStore,
        product::Product,
        review::{average_rating, PaginatedReviews, Review},
        store::{CreateStoreParams, Store, UpdateStoreParams},
        user_action::UserAction,
    },
    service::{category::CategoryService, product::ProductService, sector::SectorService},
};

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Turns store rows into domain models with their derived values.
    ///
    /// Category ids, review ids and active-review ratings are fetched in one query
    /// each for the whole batch; input order is preserved.
    pub async fn assemble(&self, stores: Vec<entity::store::Model>) -> Result<Vec<Store>, AppError> {
        let ids: Vec<i32> = stores.iter().map(|s| s.id).collect();

        let mut category_ids = StoreRepository::new(self.db)
            .category_ids_for(ids.clone())
            .await?;
        let review_repo = ReviewRepository::new(self.db);
        let mut review_ids = review_repo.ids_for(ids.clone()).await?;
        let ratings = review_repo.active_ratings_for(ids).await?;

        Ok(stores
            .into_iter()
            .map(|store| {
                let average = ratings
                    .get(&store.id)
                    .map(|r| average_rating(r))
                    .unwrap_or(0.0);
                let categories = category_ids.remove(&store.id).unwrap_or_default();
                let reviews = review_ids.remove(&store.id).unwrap_or_default();
                Store::from_entity(store, categories, reviews, average)
            })
            .collect())
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Store>, AppError> {
        let stores = StoreRepository::new(self.db).find_all(name).await?;
        self.assemble(stores).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Store>, AppError> {
        let Some(store) = StoreRepository::new(self.db).find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.assemble(vec![store]).await?.pop())
    }

    pub async fn get_by_ids(&self, ids: Vec<i32>) -> Result<Vec<Store>, AppError> {
        let stores = StoreRepository::new(self.db).find_by_ids(ids).await?;
        self.assemble(stores).await
    }

    /// Creates a store after checking every referenced row exists.
    ///
    /// The row and its category tags are written in one transaction.
    ///
    /// # Returns
    /// - `Ok(Store)` - The created store
    /// - `Err(AppError::Validation)` - Unknown owner, sector or category
    pub async fn create(&self, params: CreateStoreParams) -> Result<Store, AppError> {
        self.ensure_owner_exists(params.owner_id).await?;
        if let Some(sector_id) = params.sector_id {
            SectorService::new(self.db)
                .ensure_exists("setor", sector_id)
                .await?;
        }
        CategoryService::new(self.db)
            .ensure_exist("categorias", &params.category_ids)
            .await?;

        let txn = self.db.begin().await?;
        let store = StoreRepository::new(&txn).create(params).await?;
        txn.commit().await?;
        let id = store.id;

        self.assemble(vec![store])
            .await?
            .pop()
            .ok_or_else(|| InternalError::MissingAfterWrite { entity: "store", id }.into())
    }

    /// Applies a full or partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Store))` - Updated store
    /// - `Ok(None)` - Store does not exist
    /// - `Err(AppError::Validation)` - Unknown owner, sector or category
    pub async fn update(&self, id: i32, params: UpdateStoreParams) -> Result<Option<Store>, AppError> {
        if let Some(owner_id) = params.owner_id {
            self.ensure_owner_exists(owner_id).await?;
        }
        if let Some(Some(sector_id)) = params.sector_id {
            SectorService::new(self.db)
                .ensure_exists("setor", sector_id)
                .await?;
        }
        if let Some(category_ids) = &params.category_ids {
            CategoryService::new(self.db)
                .ensure_exist("categorias", category_ids)
                .await?;
        }

        let txn = self.db.begin().await?;
        let updated = StoreRepository::new(&txn).update(id, params).await?;
        txn.commit().await?;

        let Some(store) = updated else {
            return Ok(None);
        };
        Ok(self.assemble(vec![store]).await?.pop())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(StoreRepository::new(self.db).delete(id).await?)
    }

    /// Gets one page of the store's reviews.
    ///
    /// # Arguments
    /// - `id` - Store ID
    /// - `page` - One-based page number; 0 is read as the first page
    /// - `per_page` - Page size, must be greater than zero
    ///
    /// # Returns
    /// - `Ok(PaginatedReviews)` - Requested page, empty past the last one
    /// - `Err(AppError::BadRequest)` - Page offset does not fit the database's integer range
    /// - `Err(AppError::NotFound)` - No store with that id
    pub async fn reviews(
        &self,
        id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedReviews, AppError> {
        let page = page.max(1);
        let index = page - 1;
        match index.checked_mul(per_page) {
            Some(offset) if offset <= i64::MAX as u64 => {}
            _ => return Err(AppError::BadRequest("Invalid page.".to_string())),
        }

        self.require(id).await?;

        let (reviews, total) = ReviewRepository::new(self.db)
            .get_by_store_paginated(id, index, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        Ok(PaginatedReviews {
            reviews: reviews.into_iter().map(Review::from_entity).collect(),
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn products(&self, id: i32) -> Result<Vec<Product>, AppError> {
        self.require(id).await?;
        let products = ProductRepository::new(self.db).find_by_store(id).await?;
        ProductService::new(self.db).assemble(products).await
    }

    pub async fn categories(&self, id: i32) -> Result<Vec<Category>, AppError> {
        self.require(id).await?;
        let category_ids = StoreRepository::new(self.db)
            .category_ids_for(vec![id])
            .await?
            .remove(&id)
            .unwrap_or_default();
        CategoryService::new(self.db).get_by_ids(category_ids).await
    }

    /// Audit-log entries that reference the store.
    pub async fn actions(&self, id: i32) -> Result<Vec<UserAction>, AppError> {
        self.require(id).await?;
        let actions = UserActionRepository::new(self.db).find_by_store(id).await?;
        Ok(actions.into_iter().map(UserAction::from_entity).collect())
    }

    /// Favorite-store rows pointing at the store.
    pub async fn favorites(&self, id: i32) -> Result<Vec<FavoriteStore>, AppError> {
        self.require(id).await?;
        let favorites = FavoriteStoreRepository::new(self.db).find_by_store(id).await?;
        Ok(favorites.into_iter().map(FavoriteStore::from_entity).collect())
    }

    /// Fails with a field validation error when `id` is not an existing store.
    pub async fn ensure_exists(&self, field: &'static str, id: i32) -> Result<(), AppError> {
        if StoreRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::missing_reference(field, id));
        }
        Ok(())
    }

    async fn ensure_owner_exists(&self, owner_id: i32) -> Result<(), AppError> {
        if StoreOwnerRepository::new(self.db)
            .find_by_id(owner_id)
            .await?
            .is_none()
        {
            return Err(AppError::missing_reference("lojista", owner_id));
        }
        Ok(())
    }

    async fn require(&self, id: i32) -> Result<entity::store::Model, AppError> {
        StoreRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Store {} not found", id)))
    }
}
