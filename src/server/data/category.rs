use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::category::{CreateCategoryParams, UpdateCategoryParams};

pub struct CategoryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CategoryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: CreateCategoryParams,
    ) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();
        entity::category::ActiveModel {
            name_search: ActiveValue::Set(search_key(&params.name)),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(id).one(self.db).await
    }

    /// Lists categories ordered by id, optionally filtered by a name substring.
    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<entity::category::Model>, DbErr> {
        let mut query = entity::prelude::Category::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::category::Column::NameSearch, name));
        }
        query
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the categories with the given ids, ordered by id.
    ///
    /// Unknown ids are skipped, so comparing lengths tells the caller whether every
    /// referenced category exists.
    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::category::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(ids))
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// # Returns
    /// - `Ok(Some(Model))` - Updated category
    /// - `Ok(None)` - No category with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateCategoryParams,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        let Some(category) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::category::ActiveModel = category.into();
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a category.
    ///
    /// Join rows cascade; kiosk surveys pointing at it keep their row with the
    /// category cleared.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Category::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}
