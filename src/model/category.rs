use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i32,
    pub nome: String,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryInputDto {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CategoryPatchDto {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
}
