use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AgeRange, VisitorKind};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskSurveyDto {
    pub id: i32,
    pub tipo: VisitorKind,
    pub faixa_etaria: AgeRange,
    pub genero: String,
    pub categoria: Option<i32>,
    pub criacao: DateTime<Utc>,
    pub atualizacao: DateTime<Utc>,
    pub ativo: bool,
}

#[derive(Debug, Deserialize, Validate)]
pub struct KioskSurveyInputDto {
    pub tipo: VisitorKind,
    pub faixa_etaria: AgeRange,
    #[validate(length(min = 1, max = 20))]
    pub genero: String,
    pub categoria: Option<i32>,
}
