//! Product factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    store_id: i32,
    name: String,
    description: String,
    color: String,
    composition: String,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory for the given store.
    ///
    /// Defaults:
    /// - name: `"Product {id}"`
    /// - color: `"Azul"`
    /// - composition: `"Algodao"`
    pub fn new(db: &'a DatabaseConnection, store_id: i32) -> Self {
        Self {
            db,
            store_id,
            name: format!("Product {}", next_id()),
            description: "Test product".to_string(),
            color: "Azul".to_string(),
            composition: "Algodao".to_string(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            store_id: ActiveValue::Set(self.store_id),
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            image: ActiveValue::Set(None),
            color: ActiveValue::Set(self.color),
            composition: ActiveValue::Set(self.composition),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(true),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_product(
    db: &DatabaseConnection,
    store_id: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db, store_id).build().await
}
