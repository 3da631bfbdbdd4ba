use chrono::{DateTime, Utc};

use crate::model::favorite::{FavoriteProductDto, FavoriteStoreDto};

#[derive(Debug, Clone)]
pub struct FavoriteProduct {
    pub id: i32,
    pub shopper_id: i32,
    pub product_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl FavoriteProduct {
    pub fn from_entity(entity: entity::favorite_product::Model) -> Self {
        Self {
            id: entity.id,
            shopper_id: entity.shopper_id,
            product_id: entity.product_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> FavoriteProductDto {
        FavoriteProductDto {
            id: self.id,
            cliente: self.shopper_id,
            produto: self.product_id,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct FavoriteStore {
    pub id: i32,
    pub shopper_id: i32,
    pub store_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl FavoriteStore {
    pub fn from_entity(entity: entity::favorite_store::Model) -> Self {
        Self {
            id: entity.id,
            shopper_id: entity.shopper_id,
            store_id: entity.store_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> FavoriteStoreDto {
        FavoriteStoreDto {
            id: self.id,
            cliente: self.shopper_id,
            loja: self.store_id,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}
