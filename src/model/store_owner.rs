use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreOwnerDto {
    pub id: i32,
    pub email: String,
    pub nome: String,
    pub telefone: String,
    pub cpf_cnpj: String,
    pub foto: Option<String>,
    /// IDs of the stores this owner runs
    pub lojas: Vec<i32>,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StoreOwnerInputDto {
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(length(min = 1, max = 20))]
    pub telefone: String,
    #[validate(length(min = 11, max = 18, message = "Enter a valid CPF or CNPJ."))]
    pub cpf_cnpj: String,
    pub foto: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct StoreOwnerPatchDto {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub telefone: Option<String>,
    #[validate(length(min = 11, max = 18, message = "Enter a valid CPF or CNPJ."))]
    pub cpf_cnpj: Option<String>,
    pub foto: Option<String>,
}
