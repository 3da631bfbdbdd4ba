use chrono::{DateTime, Utc};

use crate::{
    model::store_owner::{StoreOwnerDto, StoreOwnerInputDto, StoreOwnerPatchDto},
    server::util::media::media_url,
};

#[derive(Debug, Clone)]
pub struct StoreOwner {
    pub id: i32,
    pub account_id: i32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub photo: Option<String>,
    pub store_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl StoreOwner {
    pub fn from_entity(entity: entity::store_owner::Model, email: String, store_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            email,
            name: entity.name,
            phone: entity.phone,
            tax_id: entity.tax_id,
            photo: entity.photo,
            store_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self, media_base: &str) -> StoreOwnerDto {
        StoreOwnerDto {
            id: self.id,
            email: self.email,
            nome: self.name,
            telefone: self.phone,
            cpf_cnpj: self.tax_id,
            foto: media_url(media_base, self.photo.as_deref()),
            lojas: self.store_ids,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStoreOwnerParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub tax_id: Option<String>,
    pub photo: Option<Option<String>>,
}

impl UpdateStoreOwnerParams {
    pub fn from_put(dto: StoreOwnerInputDto) -> Self {
        Self {
            name: Some(dto.nome),
            phone: Some(dto.telefone),
            tax_id: Some(dto.cpf_cnpj),
            photo: Some(dto.foto),
        }
    }

    pub fn from_patch(dto: StoreOwnerPatchDto) -> Self {
        Self {
            name: dto.nome,
            phone: dto.telefone,
            tax_id: dto.cpf_cnpj,
            photo: dto.foto.map(Some),
        }
    }
}
