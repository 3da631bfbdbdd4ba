use chrono::Utc;
use entity::sea_orm_active_enums::{AgeRange, VisitorKind};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use super::{name_matches, search_key};
use crate::server::model::shopper::UpdateShopperParams;

/// Fields of a new shopper profile.
pub struct NewShopper {
    pub account_id: i32,
    pub name: String,
    pub phone: String,
    pub photo: Option<String>,
    pub age_range: AgeRange,
    pub gender: String,
    pub kind: VisitorKind,
}

pub struct ShopperRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShopperRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a shopper profile linked to an existing account.
    pub async fn create(&self, shopper: NewShopper) -> Result<entity::shopper::Model, DbErr> {
        let now = Utc::now();
        entity::shopper::ActiveModel {
            account_id: ActiveValue::Set(shopper.account_id),
            name_search: ActiveValue::Set(search_key(&shopper.name)),
            name: ActiveValue::Set(shopper.name),
            phone: ActiveValue::Set(shopper.phone),
            photo: ActiveValue::Set(shopper.photo),
            age_range: ActiveValue::Set(shopper.age_range),
            gender: ActiveValue::Set(shopper.gender),
            kind: ActiveValue::Set(shopper.kind),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::shopper::Model>, DbErr> {
        entity::prelude::Shopper::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_account_id(
        &self,
        account_id: i32,
    ) -> Result<Option<entity::shopper::Model>, DbErr> {
        entity::prelude::Shopper::find()
            .filter(entity::shopper::Column::AccountId.eq(account_id))
            .one(self.db)
            .await
    }

    /// Lists shoppers ordered by id, optionally filtered by a name substring.
    pub async fn find_all(&self, name: Option<&str>) -> Result<Vec<entity::shopper::Model>, DbErr> {
        let mut query = entity::prelude::Shopper::find();
        if let Some(name) = name.filter(|n| !n.is_empty()) {
            query = query.filter(name_matches(entity::shopper::Column::NameSearch, name));
        }
        query
            .order_by_asc(entity::shopper::Column::Id)
            .all(self.db)
            .await
    }

    /// Applies the given changes to a shopper.
    ///
    /// Desired categories are replaced when `desired_category_ids` is set.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated shopper
    /// - `Ok(None)` - No shopper with that id
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        params: UpdateShopperParams,
    ) -> Result<Option<entity::shopper::Model>, DbErr> {
        let Some(shopper) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let mut active_model: entity::shopper::ActiveModel = shopper.into();
        if let Some(name) = params.name {
            active_model.name_search = ActiveValue::Set(search_key(&name));
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(phone) = params.phone {
            active_model.phone = ActiveValue::Set(phone);
        }
        if let Some(photo) = params.photo {
            active_model.photo = ActiveValue::Set(photo);
        }
        if let Some(age_range) = params.age_range {
            active_model.age_range = ActiveValue::Set(age_range);
        }
        if let Some(gender) = params.gender {
            active_model.gender = ActiveValue::Set(gender);
        }
        if let Some(kind) = params.kind {
            active_model.kind = ActiveValue::Set(kind);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let updated = active_model.update(self.db).await?;

        if let Some(category_ids) = params.desired_category_ids {
            self.set_desired_categories(id, category_ids).await?;
        }

        Ok(Some(updated))
    }

    /// Replaces the shopper's desired categories.
    pub async fn set_desired_categories(
        &self,
        shopper_id: i32,
        category_ids: Vec<i32>,
    ) -> Result<(), DbErr> {
        entity::prelude::ShopperCategory::delete_many()
            .filter(entity::shopper_category::Column::ShopperId.eq(shopper_id))
            .exec(self.db)
            .await?;

        let mut category_ids = category_ids;
        category_ids.sort_unstable();
        category_ids.dedup();

        for category_id in category_ids {
            entity::shopper_category::ActiveModel {
                shopper_id: ActiveValue::Set(shopper_id),
                category_id: ActiveValue::Set(category_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }

    /// Returns the ids of the shopper's desired categories, ascending.
    pub async fn desired_category_ids(&self, shopper_id: i32) -> Result<Vec<i32>, DbErr> {
        Ok(entity::prelude::ShopperCategory::find()
            .filter(entity::shopper_category::Column::ShopperId.eq(shopper_id))
            .order_by_asc(entity::shopper_category::Column::CategoryId)
            .all(self.db)
            .await?
            .into_iter()
            .map(|row| row.category_id)
            .collect())
    }
}
