use chrono::{DateTime, Utc};

use crate::model::sector::{SectorDto, SectorInputDto, SectorPatchDto};

#[derive(Debug, Clone)]
pub struct Sector {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Sector {
    pub fn from_entity(entity: entity::sector::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> SectorDto {
        SectorDto {
            id: self.id,
            nome: self.name,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSectorParams {
    pub name: String,
}

impl CreateSectorParams {
    pub fn from_dto(dto: SectorInputDto) -> Self {
        Self { name: dto.nome }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSectorParams {
    pub name: Option<String>,
}

impl UpdateSectorParams {
    pub fn from_put(dto: SectorInputDto) -> Self {
        Self {
            name: Some(dto.nome),
        }
    }

    pub fn from_patch(dto: SectorPatchDto) -> Self {
        Self { name: dto.nome }
    }
}
