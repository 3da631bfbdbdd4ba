//! Store domain model and parameters.
//!
//! A `Store` bundles the stored row with the values derived from related tables at
//! read time: its category ids, review ids and the average rating of its active reviews.

use chrono::{DateTime, Utc};

use crate::{
    model::store::{StoreDto, StoreInputDto, StorePatchDto},
    server::{model::account::Viewer, util::media::media_url},
};

#[derive(Debug, Clone)]
pub struct Store {
    pub id: i32,
    pub owner_id: i32,
    pub sector_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub photo: Option<String>,
    pub location: String,
    pub opening_hours: String,
    pub social_links: Option<String>,
    pub category_ids: Vec<i32>,
    pub review_ids: Vec<i32>,
    pub average_rating: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl Store {
    /// Converts a store entity plus its derived values into a domain model.
    ///
    /// # Arguments
    /// - `entity` - The store row
    /// - `category_ids` - IDs of the categories the store is tagged with
    /// - `review_ids` - IDs of the store's reviews
    /// - `average_rating` - Mean rating of active reviews, `0.0` when none
    pub fn from_entity(
        entity: entity::store::Model,
        category_ids: Vec<i32>,
        review_ids: Vec<i32>,
        average_rating: f64,
    ) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            sector_id: entity.sector_id,
            name: entity.name,
            description: entity.description,
            banner: entity.banner,
            logo: entity.logo,
            photo: entity.photo,
            location: entity.location,
            opening_hours: entity.opening_hours,
            social_links: entity.social_links,
            category_ids,
            review_ids,
            average_rating,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    /// Projects the store for a specific viewer.
    ///
    /// `favoritado` is true only when the viewer is a shopper with this store among
    /// their favorites; media paths are expanded under `media_url`.
    pub fn into_dto(self, viewer: &Viewer, media_base: &str) -> StoreDto {
        StoreDto {
            favoritado: viewer.has_favorite_store(self.id),
            id: self.id,
            lojista: self.owner_id,
            setor: self.sector_id,
            nome: self.name,
            descricao: self.description,
            banner: media_url(media_base, self.banner.as_deref()),
            logo: media_url(media_base, self.logo.as_deref()),
            foto_da_loja: media_url(media_base, self.photo.as_deref()),
            localizacao: self.location,
            horario_funcionamento: self.opening_hours,
            redes_sociais: self.social_links,
            categorias: self.category_ids,
            avaliacoes: self.review_ids,
            nota_media: self.average_rating,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateStoreParams {
    pub owner_id: i32,
    pub sector_id: Option<i32>,
    pub name: String,
    pub description: String,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub photo: Option<String>,
    pub location: String,
    pub opening_hours: String,
    pub social_links: Option<String>,
    pub category_ids: Vec<i32>,
}

impl CreateStoreParams {
    pub fn from_dto(owner_id: i32, dto: StoreInputDto) -> Self {
        Self {
            owner_id,
            sector_id: dto.setor,
            name: dto.nome,
            description: dto.descricao,
            banner: dto.banner,
            logo: dto.logo,
            photo: dto.foto_da_loja,
            location: dto.localizacao,
            opening_hours: dto.horario_funcionamento,
            social_links: dto.redes_sociais,
            category_ids: dto.categorias,
        }
    }
}

/// Changes to apply to a store.
///
/// Outer `None` keeps the stored value. For nullable columns the inner option is the
/// new value, so `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateStoreParams {
    pub owner_id: Option<i32>,
    pub sector_id: Option<Option<i32>>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub banner: Option<Option<String>>,
    pub logo: Option<Option<String>>,
    pub photo: Option<Option<String>>,
    pub location: Option<String>,
    pub opening_hours: Option<String>,
    pub social_links: Option<Option<String>>,
    pub category_ids: Option<Vec<i32>>,
}

impl UpdateStoreParams {
    /// Full replacement; absent nullable fields are cleared.
    pub fn from_put(owner_id: Option<i32>, dto: StoreInputDto) -> Self {
        Self {
            owner_id,
            sector_id: Some(dto.setor),
            name: Some(dto.nome),
            description: Some(dto.descricao),
            banner: Some(dto.banner),
            logo: Some(dto.logo),
            photo: Some(dto.foto_da_loja),
            location: Some(dto.localizacao),
            opening_hours: Some(dto.horario_funcionamento),
            social_links: Some(dto.redes_sociais),
            category_ids: Some(dto.categorias),
        }
    }

    /// Partial update; only fields present in the body change.
    pub fn from_patch(owner_id: Option<i32>, dto: StorePatchDto) -> Self {
        Self {
            owner_id,
            sector_id: dto.setor.map(Some),
            name: dto.nome,
            description: dto.descricao,
            banner: dto.banner.map(Some),
            logo: dto.logo.map(Some),
            photo: dto.foto_da_loja.map(Some),
            location: dto.localizacao,
            opening_hours: dto.horario_funcionamento,
            social_links: dto.redes_sociais.map(Some),
            category_ids: dto.categorias,
        }
    }
}
