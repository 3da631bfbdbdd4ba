use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AgeRange, VisitorKind};

use crate::{
    model::shopper::{ShopperDto, ShopperInputDto, ShopperPatchDto},
    server::{
        model::{account::Viewer, product::Product, store::Store},
        util::media::media_url,
    },
};

/// Shopper profile with its desired categories and favorites resolved.
#[derive(Debug, Clone)]
pub struct Shopper {
    pub id: i32,
    pub account_id: i32,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub photo: Option<String>,
    pub age_range: AgeRange,
    pub gender: String,
    pub kind: VisitorKind,
    pub desired_category_ids: Vec<i32>,
    pub favorite_products: Vec<Product>,
    pub favorite_stores: Vec<Store>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Shopper {
    /// Converts a shopper entity plus its resolved relations into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The shopper row
    /// - `email` - Email of the linked account
    /// - `desired_category_ids` - Categories the shopper is interested in
    /// - `favorite_products` - Products with an active favorite row for this shopper
    /// - `favorite_stores` - Stores with an active favorite row for this shopper
    pub fn from_entity(
        entity: entity::shopper::Model,
        email: String,
        desired_category_ids: Vec<i32>,
        favorite_products: Vec<Product>,
        favorite_stores: Vec<Store>,
    ) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            email,
            name: entity.name,
            phone: entity.phone,
            photo: entity.photo,
            age_range: entity.age_range,
            gender: entity.gender,
            kind: entity.kind,
            desired_category_ids,
            favorite_products,
            favorite_stores,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self, viewer: &Viewer, media_base: &str) -> ShopperDto {
        ShopperDto {
            id: self.id,
            email: self.email,
            nome: self.name,
            telefone: self.phone,
            foto: media_url(media_base, self.photo.as_deref()),
            faixa_etaria: self.age_range,
            genero: self.gender,
            tipo: self.kind,
            categorias_desejadas: self.desired_category_ids,
            produtos_favoritos: self
                .favorite_products
                .into_iter()
                .map(|p| p.into_dto(viewer, media_base))
                .collect(),
            lojas_favoritas: self
                .favorite_stores
                .into_iter()
                .map(|s| s.into_dto(viewer, media_base))
                .collect(),
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateShopperParams {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub photo: Option<Option<String>>,
    pub age_range: Option<AgeRange>,
    pub gender: Option<String>,
    pub kind: Option<VisitorKind>,
    pub desired_category_ids: Option<Vec<i32>>,
}

impl UpdateShopperParams {
    pub fn from_put(dto: ShopperInputDto) -> Self {
        Self {
            name: Some(dto.nome),
            phone: Some(dto.telefone),
            photo: Some(dto.foto),
            age_range: Some(dto.faixa_etaria),
            gender: Some(dto.genero),
            kind: Some(dto.tipo),
            desired_category_ids: Some(dto.categorias_desejadas),
        }
    }

    pub fn from_patch(dto: ShopperPatchDto) -> Self {
        Self {
            name: dto.nome,
            phone: dto.telefone,
            photo: dto.foto.map(Some),
            age_range: dto.faixa_etaria,
            gender: dto.genero,
            kind: dto.tipo,
            desired_category_ids: dto.categorias_desejadas,
        }
    }
}
