use chrono::{DateTime, Utc};

use crate::{
    model::product::{ProductDto, ProductInputDto, ProductPatchDto},
    server::{model::account::Viewer, util::media::media_url},
};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: i32,
    pub store_id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub color: String,
    pub composition: String,
    pub category_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Product {
    pub fn from_entity(entity: entity::product::Model, category_ids: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            store_id: entity.store_id,
            name: entity.name,
            description: entity.description,
            image: entity.image,
            color: entity.color,
            composition: entity.composition,
            category_ids,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    /// Projects the product for a specific viewer, see `Store::into_dto`.
    pub fn into_dto(self, viewer: &Viewer, media_base: &str) -> ProductDto {
        ProductDto {
            favoritado: viewer.has_favorite_product(self.id),
            id: self.id,
            loja: self.store_id,
            nome: self.name,
            descricao: self.description,
            imagem: media_url(media_base, self.image.as_deref()),
            cor: self.color,
            composicao: self.composition,
            categorias: self.category_ids,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateProductParams {
    pub store_id: i32,
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub color: String,
    pub composition: String,
    pub category_ids: Vec<i32>,
}

impl CreateProductParams {
    pub fn from_dto(dto: ProductInputDto) -> Self {
        Self {
            store_id: dto.loja,
            name: dto.nome,
            description: dto.descricao,
            image: dto.imagem,
            color: dto.cor,
            composition: dto.composicao,
            category_ids: dto.categorias,
        }
    }
}

/// Outer `None` keeps the stored value; `image: Some(None)` clears the image.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductParams {
    pub store_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub color: Option<String>,
    pub composition: Option<String>,
    pub category_ids: Option<Vec<i32>>,
}

impl UpdateProductParams {
    pub fn from_put(dto: ProductInputDto) -> Self {
        Self {
            store_id: Some(dto.loja),
            name: Some(dto.nome),
            description: Some(dto.descricao),
            image: Some(dto.imagem),
            color: Some(dto.cor),
            composition: Some(dto.composicao),
            category_ids: Some(dto.categorias),
        }
    }

    pub fn from_patch(dto: ProductPatchDto) -> Self {
        Self {
            store_id: dto.loja,
            name: dto.nome,
            description: dto.descricao,
            image: dto.imagem.map(Some),
            color: dto.cor,
            composition: dto.composicao,
            category_ids: dto.categorias,
        }
    }
}
