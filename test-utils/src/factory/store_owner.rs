//! Store owner factory.
//!
//! Creates a `store_owner` profile together with its `store_owner`-role account
//! unless an account id is supplied.

use crate::factory::{account::AccountFactory, helpers::next_id};
use chrono::Utc;
use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct StoreOwnerFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: Option<i32>,
    name: String,
    phone: String,
    tax_id: String,
}

impl<'a> StoreOwnerFactory<'a> {
    /// Creates a new StoreOwnerFactory with default values.
    ///
    /// Defaults:
    /// - account_id: None (a fresh store-owner account is created on build)
    /// - name: `"Owner {id}"`
    /// - phone: `"(11) 9000-{id}"`
    /// - tax_id: `"000.000.000-{id}"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            account_id: None,
            name: format!("Owner {}", id),
            phone: format!("(11) 9000-{}", id),
            tax_id: format!("000.000.000-{}", id),
        }
    }

    pub fn account_id(mut self, account_id: i32) -> Self {
        self.account_id = Some(account_id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::store_owner::Model, DbErr> {
        let account_id = match self.account_id {
            Some(id) => id,
            None => {
                AccountFactory::new(self.db)
                    .role(AccountRole::StoreOwner)
                    .build()
                    .await?
                    .id
            }
        };

        let now = Utc::now();
        entity::store_owner::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            tax_id: ActiveValue::Set(self.tax_id),
            photo: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_store_owner(
    db: &DatabaseConnection,
) -> Result<entity::store_owner::Model, DbErr> {
    StoreOwnerFactory::new(db).build().await
}
