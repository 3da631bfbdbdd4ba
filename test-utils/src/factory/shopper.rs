//! Shopper factory.

use crate::factory::{account::AccountFactory, helpers::next_id};
use chrono::Utc;
use entity::sea_orm_active_enums::{AccountRole, AgeRange, VisitorKind};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shoppers.
///
/// When no account id is given, a shopper-role account is created first so the
/// profile always has a login identity behind it.
pub struct ShopperFactory<'a> {
    db: &'a DatabaseConnection,
    account_id: Option<i32>,
    name: String,
    phone: String,
    age_range: AgeRange,
    gender: String,
    kind: VisitorKind,
}

impl<'a> ShopperFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            account_id: None,
            name: format!("Shopper {}", id),
            phone: format!("(11) 9100-{}", id),
            age_range: AgeRange::From26To35,
            gender: "F".to_string(),
            kind: VisitorKind::Local,
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

    pub fn age_range(mut self, age_range: AgeRange) -> Self {
        self.age_range = age_range;
        self
    }

    pub fn kind(mut self, kind: VisitorKind) -> Self {
        self.kind = kind;
        self
    }

    pub async fn build(self) -> Result<entity::shopper::Model, DbErr> {
        let account_id = match self.account_id {
            Some(id) => id,
            None => {
                AccountFactory::new(self.db)
                    .role(AccountRole::Shopper)
                    .build()
                    .await?
                    .id
            }
        };

        let now = Utc::now();
        entity::shopper::ActiveModel {
            account_id: ActiveValue::Set(account_id),
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            phone: ActiveValue::Set(self.phone),
            photo: ActiveValue::Set(None),
            age_range: ActiveValue::Set(self.age_range),
            gender: ActiveValue::Set(self.gender),
            kind: ActiveValue::Set(self.kind),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_shopper(db: &DatabaseConnection) -> Result<entity::shopper::Model, DbErr> {
    ShopperFactory::new(db).build().await
}
