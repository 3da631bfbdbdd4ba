use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::product::{CreateProductParams, UpdateProductParams};

/// Generic over the connection so writes that touch the category tags can run in one
/// transaction.
pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a product and tags it with the given categories.
    pub async fn create(
        &self,
        params: CreateProductParams,
    ) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        let product = entity::product::ActiveModel {
            store_id: ActiveValue::Set(params.store_id),
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            image: ActiveValue::Set(params.image),
            color: ActiveValue::Set(params.color),
            composition: ActiveValue::Set(params.composition),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.set_categories(product.id, params.category_ids).await?;

        Ok(product)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<entity::product::Model>, DbErr> {
        let mut query = entity::prelude::Product::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::product::Column::NameSearch, name));
        }
        query
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::product::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Product::find()
            .filter(entity::product::Column::Id.is_in(ids))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_store(&self, store_id: i32) -> Result<Vec<entity::product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(entity::product::Column::StoreId.eq(store_id))
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns products tagged with at least one of the given categories, each once,
    /// ordered by id.
    pub async fn find_by_category_ids(
        &self,
        category_ids: Vec<i32>,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        if category_ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut product_ids: Vec<i32> = entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::CategoryId.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.product_id)
            .collect();
        product_ids.sort_unstable();
        product_ids.dedup();

        self.find_by_ids(product_ids).await
    }

    /// Maps each given product id to its category ids (ascending).
    pub async fn category_ids_for(
        &self,
        product_ids: Vec<i32>,
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if product_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::ProductCategory::find()
            .filter(entity::product_category::Column::ProductId.is_in(product_ids))
            .order_by_asc(entity::product_category::Column::CategoryId)
            .all(self.db)
            .await?;

        let mut map: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            map.entry(row.product_id).or_default().push(row.category_id);
        }
        Ok(map)
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateProductParams,
    ) -> Result<Option<entity::product::Model>, DbErr> {
        let Some(product) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = product.into();
        if let Some(store_id) = params.store_id {
            active_model.store_id = ActiveValue::Set(store_id);
        }
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(image) = params.image {
            active_model.image = ActiveValue::Set(image);
        }
        if let Some(color) = params.color {
            active_model.color = ActiveValue::Set(color);
        }
        if let Some(composition) = params.composition {
            active_model.composition = ActiveValue::Set(composition);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        if let Some(category_ids) = params.category_ids {
            self.set_categories(id, category_ids).await?;
        }

        Ok(Some(updated))
    }

    pub async fn set_categories(
        &self,
        product_id: i32,
        category_ids: Vec<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::ProductCategory::delete_many()
            .filter(entity::product_category::Column::ProductId.eq(product_id))
            .exec(self.db)
            .await?;

        let mut category_ids = category_ids;
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in category_ids {
            entity::product_category::ActiveModel {
                product_id: ActiveValue::Set(product_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
