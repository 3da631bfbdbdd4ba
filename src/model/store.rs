use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreDto {
    pub id: i32,
    pub lojista: i32,
    pub setor: Option<i32>,
    pub nome: String,
    pub descricao: String,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub foto_da_loja: Option<String>,
    pub localizacao: String,
    pub horario_funcionamento: String,
    pub redes_sociais: Option<String>,
    pub categorias: Vec<i32>,
    /// IDs of the store's reviews
    pub avaliacoes: Vec<i32>,
    pub nota_media: f64,
    /// Whether the requesting shopper has this store among their favorites
    pub favoritado: bool,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

/// Body of `POST /lojas` and `PUT /lojas/{id}`.
///
/// `lojista` is required for admins and ignored for store owners, whose stores
/// always belong to their own profile.
#[derive(Debug, Deserialize, Validate)]
pub struct StoreInputDto {
    pub lojista: Option<i32>,
    pub setor: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub foto_da_loja: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub localizacao: String,
    #[validate(length(min = 1, max = 100))]
    pub horario_funcionamento: String,
    pub redes_sociais: Option<String>,
    #[serde(default)]
    pub categorias: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StorePatchDto {
    pub lojista: Option<i32>,
    pub setor: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub foto_da_loja: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub localizacao: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub horario_funcionamento: Option<String>,
    pub redes_sociais: Option<String>,
    pub categorias: Option<Vec<i32>>,
}
