//! Repositories for the favorite-product and favorite-store join entities.
//!
//! Both tables carry a unique index on (shopper, target); callers check
//! `find_by_shopper_and_*` before inserting and treat a unique violation on insert
//! as a lost race.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

pub struct FavoriteProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        shopper_id: i32,
        product_id: i32,
    ) -> Result<entity::favorite_product::Model, DbErr> {
        let now = Utc::now();
        entity::favorite_product::ActiveModel {
            shopper_id: ActiveValue::Set(shopper_id),
            product_id: ActiveValue::Set(product_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::favorite_product::Model>, DbErr> {
        entity::prelude::FavoriteProduct::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists favorite rows ordered by id, optionally limited to one shopper.
    pub async fn find_all(
        &self,
        shopper_id: Option<i32>,
    ) -> Result<Vec<entity::favorite_product::Model>, DbErr> {
        let mut query = entity::prelude::FavoriteProduct::find();
        if let Some(shopper_id) = shopper_id {
            query = query.filter(entity::favorite_product::Column::ShopperId.eq(shopper_id));
        }
        query
            .order_by_asc(entity::favorite_product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_product(
        &self,
        product_id: i32,
    ) -> Result<Vec<entity::favorite_product::Model>, DbErr> {
        entity::prelude::FavoriteProduct::find()
            .filter(entity::favorite_product::Column::ProductId.eq(product_id))
            .order_by_asc(entity::favorite_product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_shopper_and_product(
        &self,
        shopper_id: i32,
        product_id: i32,
    ) -> Result<Option<entity::favorite_product::Model>, DbErr> {
        entity::prelude::FavoriteProduct::find()
            .filter(entity::favorite_product::Column::ShopperId.eq(shopper_id))
            .filter(entity::favorite_product::Column::ProductId.eq(product_id))
            .one(self.db)
            .await
    }

    /// Ids of the products the shopper has actively favorited, ascending.
    pub async fn product_ids_for_shopper(&self, shopper_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::FavoriteProduct::find()
            .filter(entity::favorite_product::Column::ShopperId.eq(shopper_id))
            .filter(entity::favorite_product::Column::Active.eq(true))
            .order_by_asc(entity::favorite_product::Column::ProductId)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.product_id)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteProduct::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

pub struct FavoriteStoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavoriteStoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        shopper_id: i32,
        store_id: i32,
    ) -> Result<entity::favorite_store::Model, DbErr> {
        let now = Utc::now();
        entity::favorite_store::ActiveModel {
            shopper_id: ActiveValue::Set(shopper_id),
            store_id: ActiveValue::Set(store_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::favorite_store::Model>, DbErr> {
        entity::prelude::FavoriteStore::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn find_all(
        &self,
        shopper_id: Option<i32>,
    ) -> Result<Vec<entity::favorite_store::Model>, DbErr> {
        let mut query = entity::prelude::FavoriteStore::find();
        if let Some(shopper_id) = shopper_id {
            query = query.filter(entity::favorite_store::Column::ShopperId.eq(shopper_id));
        }
        query
            .order_by_asc(entity::favorite_store::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_store(
        &self,
        store_id: i32,
    ) -> Result<Vec<entity::favorite_store::Model>, DbErr> {
        entity::prelude::FavoriteStore::find()
            .filter(entity::favorite_store::Column::StoreId.eq(store_id))
            .order_by_asc(entity::favorite_store::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_shopper_and_store(
        &self,
        shopper_id: i32,
        store_id: i32,
    ) -> Result<Option<entity::favorite_store::Model>, DbErr> {
        entity::prelude::FavoriteStore::find()
            .filter(entity::favorite_store::Column::ShopperId.eq(shopper_id))
            .filter(entity::favorite_store::Column::StoreId.eq(store_id))
            .one(self.db)
            .await
    }

    /// Ids of the stores the shopper has actively favorited, ascending.
    pub async fn store_ids_for_shopper(&self, shopper_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::FavoriteStore::find()
            .filter(entity::favorite_store::Column::ShopperId.eq(shopper_id))
            .filter(entity::favorite_store::Column::Active.eq(true))
            .order_by_asc(entity::favorite_store::Column::StoreId)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.store_id)
            .collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::FavoriteStore::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
