use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::user_action::RecordUserActionParams;

/// Append-only access to the audit trail.
///
/// Rows are never updated or deleted here; they only disappear through the
/// account cascade.
pub struct UserActionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserActionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        params: RecordUserActionParams,
    ) -> Result<entity::user_action::Model, DbErr> {
        entity::user_action::ActiveModel {
            account_id: ActiveValue::Set(params.account_id),
            action: ActiveValue::Set(params.action),
            store_id: ActiveValue::Set(params.store_id),
            product_id: ActiveValue::Set(params.product_id),
            detail: ActiveValue::Set(params.detail),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Lists actions ordered by id, optionally limited to one account.
    pub async fn find_all(
        &self,
        account_id: Option<i32>,
    ) -> Result<Vec<entity::user_action::Model>, DbErr> {
        let mut query = entity::prelude::UserAction::find();
        if let Some(account_id) = account_id {
            query = query.filter(entity::user_action::Column::AccountId.eq(account_id));
        }
        query
            .order_by_asc(entity::user_action::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_store(
        &self,
        store_id: i32,
    ) -> Result<Vec<entity::user_action::Model>, DbErr> {
        entity::prelude::UserAction::find()
            .filter(entity::user_action::Column::StoreId.eq(store_id))
            .order_by_asc(entity::user_action::Column::Id)
            .all(self.db)
            .await
    }
}
