//! Store factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test stores owned by an existing store owner.
///
/// # Example
///
/// ```rust,ignore
/// let store = StoreFactory::new(&db, owner.id)
///     .name("Livraria Central")
///     .sector_id(sector.id)
///     .build()
///     .await?;
/// ```
pub struct StoreFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    sector_id: Option<i32>,
    name: String,
    description: String,
    location: String,
    opening_hours: String,
    active: bool,
}

impl<'a> StoreFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id,
            sector_id: None,
            name: format!("Store {}", id),
            description: "Test store".to_string(),
            location: format!("Piso 1, Loja {}", id),
            opening_hours: "10h-22h".to_string(),
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sector_id(mut self, sector_id: i32) -> Self {
        self.sector_id = Some(sector_id);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::store::Model, DbErr> {
        let now = Utc::now();
        entity::store::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            sector_id: ActiveValue::Set(self.sector_id),
            name_search: ActiveValue::Set(self.name.to_lowercase()),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            banner: ActiveValue::Set(None),
            logo: ActiveValue::Set(None),
            photo: ActiveValue::Set(None),
            location: ActiveValue::Set(self.location),
            opening_hours: ActiveValue::Set(self.opening_hours),
            social_links: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_store(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::store::Model, DbErr> {
    StoreFactory::new(db, owner_id).build().await
}
