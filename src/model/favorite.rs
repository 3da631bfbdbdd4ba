use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteProductDto {
    pub id: i32,
    pub cliente: i32,
    pub produto: i32,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteStoreDto {
    pub id: i32,
    pub cliente: i32,
    pub loja: i32,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

/// `cliente` is required for admins; shoppers always favorite for themselves.
#[derive(Debug, Deserialize, Validate)]
pub struct FavoriteProductInputDto {
    pub cliente: Option<i32>,
    pub produto: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct FavoriteStoreInputDto {
    pub cliente: Option<i32>,
    pub loja: i32,
}
