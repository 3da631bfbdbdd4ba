use chrono::{DateTime, Utc};

use crate::model::category::{CategoryDto, CategoryInputDto, CategoryPatchDto};

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Category {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            nome: self.name,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CategoryInputDto) -> Self {
        Self { name: dto.nome }
    }
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateCategoryParams {
    pub name: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_put(dto: CategoryInputDto) -> Self {
        Self {
            name: Some(dto.nome),
        }
    }

    pub fn from_patch(dto: CategoryPatchDto) -> Self {
        Self { name: dto.nome }
    }
}
