use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::store_owner::UpdateStoreOwnerParams;

pub struct NewStoreOwner {
    pub account_id: i32,
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub photo: Option<String>,
}

pub struct StoreOwnerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreOwnerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, owner: NewStoreOwner) -> Result<entity::store_owner::Model, DbErr> {
        let now = Utc::now();
        entity::store_owner::ActiveModel {
            account_id: ActiveValue::Set(owner.account_id),
            name_search: ActiveValue::Set(search_key(&owner.name)),
            name: ActiveValue::Set(owner.name),
            phone: ActiveValue::Set(owner.phone),
            tax_id: ActiveValue::Set(owner.tax_id),
            photo: ActiveValue::Set(owner.photo),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::store_owner::Model>, DbErr> {
        entity::prelude::StoreOwner::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::store_owner::Model>, DbErr> {
        entity::prelude::StoreOwner::find()
            .filter(entity::store_owner::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    pub async fn find_all(
        &self,
        name: Option<&str>,
    ) -> Result<Vec<entity::store_owner::Model>, DbErr> {
        let mut query = entity::prelude::StoreOwner::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::store_owner::Column::NameSearch, name));
        }
        query
            .order_by_asc(entity::store_owner::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the given changes to a store owner.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated store owner
    /// - `Ok(None)` - No store owner with that id
    pub async fn update(
        &self,
        id: i32,
        params: UpdateStoreOwnerParams,
    ) -> Result<Option<entity::store_owner::Model>, DbErr> {
        let Some(owner) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::store_owner::ActiveModel = owner.into();
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(tax_id) = params.tax_id {
            active_model.tax_id = ActiveValue::Set(tax_id);
        }
        if let Some(photo) = params.photo {
            active_model.photo = ActiveValue::Set(photo);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(active_model.update(self.db).await?))
    }
}
