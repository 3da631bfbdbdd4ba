//! Account, token and viewer models.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AccountRole, AgeRange, VisitorKind};

use crate::{
    model::account::{
        AccountDto, ProfileDto, RegisterShopperDto, RegisterStoreOwnerDto, TokenPairDto,
    },
    server::model::{shopper::Shopper, store_owner::StoreOwner},
};

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

impl TokenPair {
    pub fn into_dto(self) -> TokenPairDto {
        TokenPairDto {
            access: self.access,
            refresh: self.refresh,
        }
    }
}

/// Login identity without its credential hash.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: i32,
    pub email: String,
    pub role: AccountRole,
    pub created_at: DateTime<Utc>,
    pub active: bool,
}

impl Account {
    pub fn from_entity(entity: entity::account::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> AccountDto {
        AccountDto {
            id: self.id,
            email: self.email,
            tipo_usuario: self.role,
            criacao: self.created_at,
            ativo: self.active,
        }
    }
}

/// The account making a request, with what is needed to compute per-viewer fields.
///
/// Loaded once per request by `AccountService::viewer`. For shoppers the favorite
/// sets drive the `favoritado` flag on store and product responses; for every other
/// role they are empty.
#[derive(Debug, Clone)]
pub struct Viewer {
    pub account_id: i32,
    pub role: AccountRole,
    pub shopper_id: Option<i32>,
    pub store_owner_id: Option<i32>,
    pub favorite_store_ids: HashSet<i32>,
    pub favorite_product_ids: HashSet<i32>,
}

impl Viewer {
    /// Viewer with no profile and no favorites.
    pub fn bare(account_id: i32, role: AccountRole) -> Self {
        Self {
            account_id,
            role,
            shopper_id: None,
            store_owner_id: None,
            favorite_store_ids: HashSet::new(),
            favorite_product_ids: HashSet::new(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == AccountRole::Admin
    }

    pub fn has_favorite_store(&self, store_id: i32) -> bool {
        self.favorite_store_ids.contains(&store_id)
    }

    pub fn has_favorite_product(&self, product_id: i32) -> bool {
        self.favorite_product_ids.contains(&product_id)
    }
}

/// Result of `GET /meu-perfil`.
pub struct Profile {
    pub account: Account,
    pub shopper: Option<Shopper>,
    pub store_owner: Option<StoreOwner>,
}

impl Profile {
    pub fn into_dto(self, viewer: &Viewer, media_url: &str) -> ProfileDto {
        ProfileDto {
            conta: self.account.into_dto(),
            cliente: self.shopper.map(|s| s.into_dto(viewer, media_url)),
            lojista: self.store_owner.map(|o| o.into_dto(media_url)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterShopperParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub photo: Option<String>,
    pub age_range: AgeRange,
    pub gender: String,
    pub kind: VisitorKind,
    pub desired_category_ids: Vec<i32>,
}

impl RegisterShopperParams {
    pub fn from_dto(dto: RegisterShopperDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.senha,
            name: dto.nome,
            phone: dto.telefone,
            photo: dto.foto,
            age_range: dto.faixa_etaria,
            gender: dto.genero,
            kind: dto.tipo,
            desired_category_ids: dto.categorias_desejadas,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RegisterStoreOwnerParams {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub tax_id: String,
    pub photo: Option<String>,
}

impl RegisterStoreOwnerParams {
    pub fn from_dto(dto: RegisterStoreOwnerDto) -> Self {
        Self {
            email: dto.email.trim().to_lowercase(),
            password: dto.senha,
            name: dto.nome,
            phone: dto.telefone,
            tax_id: dto.cpf_cnpj,
            photo: dto.foto,
        }
    }
}
