use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{AgeRange, VisitorKind};

use crate::model::kiosk::{KioskSurveyDto, KioskSurveyInputDto};

/// Anonymous survey answered at a mall kiosk.
#[derive(Debug, Clone)]
pub struct KioskSurvey {
    pub id: i32,
    pub visitor_kind: VisitorKind,
    pub age_range: AgeRange,
    pub gender: String,
    pub category_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub active: bool,
}

impl KioskSurvey {
    pub fn from_entity(entity: entity::kiosk_survey::Model) -> Self {
        Self {
            id: entity.id,
            visitor_kind: entity.visitor_kind,
            age_range: entity.age_range,
            gender: entity.gender,
            category_id: entity.category_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> KioskSurveyDto {
        KioskSurveyDto {
            id: self.id,
            tipo: self.visitor_kind,
            faixa_etaria: self.age_range,
            genero: self.gender,
            categoria: self.category_id,
            criacao: self.created_at,
            atualizacao: self.updated_at,
            ativo: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateKioskSurveyParams {
    pub visitor_kind: VisitorKind,
    pub age_range: AgeRange,
    pub gender: String,
    pub category_id: Option<i32>,
}

impl CreateKioskSurveyParams {
    pub fn from_dto(dto: KioskSurveyInputDto) -> Self {
        Self {
            visitor_kind: dto.tipo,
            age_range: dto.faixa_etaria,
            gender: dto.genero,
            category_id: dto.categoria,
        }
    }
}
