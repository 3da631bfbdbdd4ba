//! Sector factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct SectorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> SectorFactory<'a> {
    /// Creates a new SectorFactory named `"Sector {id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Sector {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::sector::Model, DbErr> {
        let now = Utc::now();
        entity::sector::ActiveModel {
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

pub async fn create_sector(db: &DatabaseConnection) -> Result<entity::sector::Model, DbErr> {
    SectorFactory::new(db).build().await
}

/// Creates a sector with a specific name.
pub async fn create_sector_named(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::sector::Model, DbErr> {
    SectorFactory::new(db).name(name).build().await
}
