//! Category factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory named `"Category {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Category {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        let now = Utc::now();
        entity::category::ActiveModel {
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}

/// Creates a category with a specific name.
pub async fn create_category_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).name(name).build().await
}
