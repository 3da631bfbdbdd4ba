use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AgeRange, VisitorKind};

/// Anonymous demographic answer captured at an in-venue kiosk.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kiosk_survey")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub visitor_kind: VisitorKind,
    pub age_range: AgeRange,
    pub gender: String,
    pub category_id: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
