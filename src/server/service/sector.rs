use sea_orm::DatabaseConnection;

use crate::server::{
    data::{sector::SectorRepository, store::StoreRepository},
    error::AppError,
    model::{
        category::Category,
        sector::{CreateSectorParams, Sector, UpdateSectorParams},
        store::Store,
    },
    service::{category::CategoryService, store::StoreService},
};

pub struct SectorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectorService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSectorParams) -> Result<Sector, AppError> {
        let sector = SectorRepository::new(self.db).create(params).await?;
        Ok(Sector::from_entity(sector))
    }

    pub async fn get_all(&self, name: Option<&str>) -> Result<Vec<Sector>, AppError> {
        let sectors = SectorRepository::new(self.db).find_all(name).await?;
        Ok(sectors.into_iter().map(Sector::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Sector>, AppError> {
        let sector = SectorRepository::new(self.db).find_by_id(id).await?;
        Ok(sector.map(Sector::from_entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateSectorParams,
    ) -> Result<Option<Sector>, AppError> {
        let sector = SectorRepository::new(self.db).update(id, params).await?;
        Ok(sector.map(Sector::from_entity))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(SectorRepository::new(self.db).delete(id).await?)
    }

    /// Stores located in the sector, ordered by id.
    ///
    /// # Returns
    /// - `Err(AppError::NotFound)` - Sector does not exist
    pub async fn stores(&self, id: i32) -> Result<Vec<Store>, AppError> {
        self.require(id).await?;
        let stores = StoreRepository::new(self.db).find_by_sector(id).await?;
        StoreService::new(self.db).assemble(stores).await
    }

    /// Categories carried by at least one store in the sector, ordered by id.
    pub async fn categories(&self, id: i32) -> Result<Vec<Category>, AppError> {
        self.require(id).await?;

        let store_repo = StoreRepository::new(self.db);
        let store_ids = store_repo
            .find_by_sector(id)
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        let mut category_ids: Vec<i32> = store_repo
            .category_ids_for(store_ids)
            .await?
            .into_values()
            .flatten()
            .collect();
        category_ids.sort_unstable();
        category_ids.dedup();

        CategoryService::new(self.db).get_by_ids(category_ids).await
    }

    /// Fails with a field validation error when `id` is not an existing sector.
    pub async fn ensure_exists(&self, field: &'static str, id: i32) -> Result<(), AppError> {
        if SectorRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(AppError::missing_reference(field, id));
        }
        Ok(())
    }

    async fn require(&self, id: i32) -> Result<entity::sector::Model, AppError> {
        SectorRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Sector {} not found", id)))
    }
}
