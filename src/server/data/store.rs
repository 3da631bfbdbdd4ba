use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::store::{CreateStoreParams, UpdateStoreParams};

/// Generic over the connection so writes that touch the category tags can run in one
/// transaction.
pub struct StoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreRepository<'a, C> {
    /// Creates a new StoreRepository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection or open transaction
    ///
    /// # Returns
    /// - `StoreRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a store and tags it with the given categories.
    ///
    /// # Arguments
    /// - `params` - Store fields, owning store owner and category ids
    ///
    /// # Returns
    /// - `Ok(Model)` - The created store
    /// - `Err(DbErr)` - Database error, including foreign-key violations for an unknown
    ///   owner, sector or category
    pub async fn create(&self, params: CreateStoreParams) -> Result<entity::store::Model, DbErr> {
        let now = Utc::now();
        let store = entity::store::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            sector_id: ActiveValue::Set(params.sector_id),
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            banner: ActiveValue::Set(params.banner),
            logo: ActiveValue::Set(params.logo),
            photo: ActiveValue::Set(params.photo),
            location: ActiveValue::Set(params.location),
            opening_hours: ActiveValue::Set(params.opening_hours),
            social_links: ActiveValue::Set(params.social_links),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_categories(store.id, params.category_ids).await?;

        Ok(store)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::store::Model>, DbErr> {
        entity::prelude::Store::find_by_id(id).one(self.db).await
    }

    /// Lists stores ordered by id.
    ///
    /// # Arguments
    /// - `name` - Optional case-insensitive substring filter on the store name
    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<entity::store::Model>, DbErr> {
        let mut query = entity::prelude::Store::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::store::Column::NameSearch, name));
        }
        query.order_by_asc(entity::store::Column::Id).all(self.db).await
    }

    /// Returns the stores with the given ids, ordered by id.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::store::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Store::find()
            .filter(entity::store::Column::Id.is_in(ids))
            .order_by_asc(entity::store::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_sector(&self, sector_id: i32) -> Result<Vec<entity::store::Model>, DbErr> {
        entity::prelude::Store::find()
            .filter(entity::store::Column::SectorId.eq(sector_id))
            .order_by_asc(entity::store::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns stores tagged with at least one of the given categories.
    ///
    /// Each store appears once, ordered by id, however many of the categories it carries.
    pub async fn find_by_category_ids(
        &self,
        category_ids: Vec<i32>,
    ) -> Result<Vec<entity::store::Model>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut store_ids: Vec<i32> = entity::prelude::StoreCategory::find()
            .filter(entity::store_category::Column::CategoryId.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.store_id)
            .collect();
        store_ids.sort_unstable();
        store_ids.dedup();

        self.find_by_ids(store_ids).await
    }

    /// Maps each given store id to its category ids (ascending).
    ///
    /// Stores without categories are absent from the map.
    pub async fn category_ids_for(
        &self,
        store_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if store_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::StoreCategory::find()
            .filter(entity::store_category::Column::StoreId.is_in(store_ids))
            .order_by_asc(entity::store_category::Column::CategoryId)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            map.entry(row.store_id).or_default().push(row.category_id);
        }
        Ok(map)
    }

    /// Maps each given owner id to the ids of their stores.
    pub async fn ids_by_owner(&self, owner_ids: Vec<i32>) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if owner_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let stores = entity::prelude::Store::find()
            .filter(entity::store::Column::OwnerId.is_in(owner_ids))
            .order_by_asc(entity::store::Column::Id)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for store in stores {
            map.entry(store.owner_id).or_default().push(store.id);
        }
        Ok(map)
    }

    /// Applies the given changes to a store.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated store
    /// - `Ok(None)` - No store with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStoreParams,
    ) -> Result<Option<entity::store::Model>, DbErr> {
        let Some(store) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::store::ActiveModel = store.into();
        if let Some(owner_id) = params.owner_id {
            active_model.owner_id = ActiveValue::Set(owner_id);
        }
        if let Some(sector_id) = params.sector_id {
            active_model.sector_id = ActiveValue::Set(sector_id);
        }
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(banner) = params.banner {
            active_model.banner = ActiveValue::Set(banner);
        }
        if let Some(logo) = params.logo {
            active_model.logo = ActiveValue::Set(logo);
        }
        if let Some(photo) = params.photo {
            active_model.photo = ActiveValue::Set(photo);
        }
        if let Some(location) = params.location {
            active_model.location = ActiveValue::Set(location);
        }
        if let Some(opening_hours) = params.opening_hours {
            active_model.opening_hours = ActiveValue::Set(opening_hours);
        }
        if let Some(social_links) = params.social_links {
            active_model.social_links = ActiveValue::Set(social_links);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        if let Some(category_ids) = params.category_ids {
            self.set_categories(id, category_ids).await?;
        }

        Ok(Some(updated))
    }

    /// Replaces the store's category tags.
    pub async fn set_categories(&self, store_id: i32, category_ids: Vec<i32>) -> Result<(), DbErr> {
        entity::prelude::StoreCategory::delete_many()
            .filter(entity::store_category::Column::StoreId.eq(store_id))
            .exec(self.db)
            .await?;

        let mut category_ids = category_ids;
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in category_ids {
            entity::store_category::ActiveModel {
                store_id: ActiveValue::Set(store_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Deletes a store; products, reviews, tags and favorites cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Store::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
