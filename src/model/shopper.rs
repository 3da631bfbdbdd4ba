use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AgeRange, VisitorKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{product::ProductDto, store::StoreDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShopperDto {
    pub id: i32,
    pub email: String,
    pub nome: String,
    pub telefone: String,
    pub foto: Option<String>,
    pub faixa_etaria: AgeRange,
    pub genero: String,
    pub tipo: VisitorKind,
    pub categorias_desejadas: Vec<i32>,
    pub produtos_favoritos: Vec<ProductDto>,
    pub lojas_favoritas: Vec<StoreDto>,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ShopperInputDto {
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
pub struct ShopperPatchDto {
    #[validate(length(min = 1, max = 100))]
    pub nome: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub telefone: Option<String>,
    pub foto: Option<String>,
    pub faixa_etaria: Option<AgeRange>,
    #[validate(length(min = 1, max = 20))]
    pub genero: Option<String>,
    pub tipo: Option<VisitorKind>,
    pub categorias_desejadas: Option<Vec<i32>>,
}
