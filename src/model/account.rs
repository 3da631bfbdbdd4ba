use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AccountRole, AgeRange, VisitorKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{shopper::ShopperDto, store_owner::StoreOwnerDto};

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequestDto {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub senha: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RefreshRequestDto {
    #[validate(length(min = 1, message = "This field may not be blank."))]
    pub refresh: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AccountDto {
    pub id: i32,
    pub email: String,
    pub tipo_usuario: AccountRole,
    pub criacao: DateTime<Utc>,
    pub ativo: bool,
}

/// Response of `GET /meu-perfil`.
///
/// Exactly one of `cliente` / `lojista` is set for shoppers and store owners;
/// both are absent for admins.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileDto {
    pub conta: AccountDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cliente: Option<ShopperDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lojista: Option<StoreOwnerDto>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterShopperDto {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Ensure this field has at least 8 characters."))]
    pub senha: String,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(length(min = 1, max = 20))]
    pub telefone: String,
    pub foto: Option<String>,
    pub faixa_etaria: AgeRange,
    #[validate(length(min = 1, max = 20))]
    pub genero: String,
    pub tipo: VisitorKind,
    #[serde(default)]
    pub categorias_desejadas: Vec<i32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterStoreOwnerDto {
    #[validate(email(message = "Enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Ensure this field has at least 8 characters."))]
    pub senha: String,
    #[validate(length(min = 1, max = 100))]
    pub nome: String,
    #[validate(length(min = 1, max = 20))]
    pub telefone: String,
    #[validate(length(min = 11, max = 18, message = "Enter a valid CPF or CNPJ."))]
    pub cpf_cnpj: String,
    pub foto: Option<String>,
}
