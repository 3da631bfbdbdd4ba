use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::review::{CreateReviewParams, UpdateReviewParams};

pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateReviewParams) -> Result<entity::review::Model, DbErr> {
        let now = Utc::now();
        entity::review::ActiveModel {
            shopper_id: ActiveValue::Set(params.shopper_id),
            store_id: ActiveValue::Set(params.store_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::review::Model>, DbErr> {
        entity::prelude::Review::find_by_id(id).one(self.db).await
    }

    /// Lists reviews ordered by id, optionally limited to one store.
    pub async fn find_all(&self, store_id: Option<i32>) -> Result<Vec<entity::review::Model>, DbErr> {
        let mut query = entity::prelude::Review::find();
        if let Some(store_id) = store_id {
            query = query.filter(entity::review::Column::StoreId.eq(store_id));
        }
        query
            .order_by_asc(entity::review::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets one page of a store's reviews, newest first.
    ///
    /// # Arguments
    /// - `store_id` - Store whose reviews to fetch
    /// - `page` - Zero-based page index
    /// - `per_page` - Page size, must be greater than zero
    ///
    /// # Returns
    /// - `Ok((reviews, total))` - Reviews on the requested page and total review count
    pub async fn get_by_store_paginated(
        &self,
        store_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::review::Model>, u64), DbErr> {
        let paginator = entity::prelude::Review::find()
            .filter(entity::review::Column::StoreId.eq(store_id))
            .order_by_desc(entity::review::Column::CreatedAt)
            .order_by_desc(entity::review::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let reviews = paginator.fetch_page(page).await?;

        Ok((reviews, total))
    }

    /// Maps each given store id to the ratings of its active reviews.
    ///
    /// Stores without active reviews are absent from the map.
    pub async fn active_ratings_for(
        &self,
        store_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<f64>>, DbErr> {
        if store_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, f64)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::StoreId)
            .column(entity::review::Column::Rating)
            .filter(entity::review::Column::StoreId.is_in(store_ids))
            .filter(entity::review::Column::Active.eq(true))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<f64>> = HashMap::new();
        for (store_id, rating) in rows {
            map.entry(store_id).or_default().push(rating);
        }
        Ok(map)
    }

    /// Maps each given store id to its review ids (ascending).
    pub async fn ids_for(&self, store_ids: Vec<i32>) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if store_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i32)> = entity::prelude::Review::find()
            .select_only()
            .column(entity::review::Column::StoreId)
            .column(entity::review::Column::Id)
            .filter(entity::review::Column::StoreId.is_in(store_ids))
            .order_by_asc(entity::review::Column::Id)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for (store_id, review_id) in rows {
            map.entry(store_id).or_default().push(review_id);
        }
        Ok(map)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateReviewParams,
    ) -> Result<Option<entity::review::Model>, DbErr> {
        let Some(review) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::review::ActiveModel = review.into();
        if let Some(store_id) = params.store_id {
            active_model.store_id = ActiveValue::Set(store_id);
        }
        if let Some(rating) = params.rating {
            active_model.rating = ActiveValue::Set(rating);
        }
        if let Some(comment) = params.comment {
            active_model.comment = ActiveValue::Set(comment);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Review::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
