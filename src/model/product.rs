use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: i32,
    pub loja: i32,
    pub nome: String,
    pub descricao: String,
    pub imagem: Option<String>,
    pub cor: String,
    pub composicao: String,
    pub categorias: Vec<i32>,
    pub favoritado: bool,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductInputDto {
    pub loja: i32,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[serde(default)]
    pub descricao: String,
    pub imagem: Option<String>,
    #[validate(length(max = 50))]
    pub cor: String,
    #[serde(default)]
    pub composicao: String,
    #[serde(default)]
    pub categorias: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ProductPatchDto {
    pub loja: Option<i32>,
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub imagem: Option<String>,
    #[validate(length(max = 50))]
    pub cor: Option<String>,
    pub composicao: Option<String>,
    pub categorias: Option<Vec<i32>>,
}
