use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::sector::{CreateSectorParams, UpdateSectorParams};

pub struct SectorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SectorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSectorParams) -> Result<entity::sector::Model, DbErr> {
        let now = Utc::now();
        entity::sector::ActiveModel {
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

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::sector::Model>, DbErr> {
        entity::prelude::Sector::find_by_id(id).one(self.db).await
    }

    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<entity::sector::Model>, DbErr> {
        let mut query = entity::prelude::Sector::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::sector::Column::NameSearch, name));
        }
        query
            .order_by_asc(entity::sector::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_ids(&self, ids: Vec<i32>) -> Result<Vec<entity::sector::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        entity::prelude::Sector::find()
            .filter(entity::sector::Column::Id.is_in(ids))
            .order_by_asc(entity::sector::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateSectorParams,
    ) -> Result<Option<entity::sector::Model>, DbErr> {
        let Some(sector) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::sector::ActiveModel = sector.into();
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a sector; its stores stay with no sector.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Sector::delete_by_id(id).exec(self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
