use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{AgeRange, VisitorKind};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "shopper")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub account_id: i32,
    pub name: String,
    pub name_search: String,
    pub phone: String,
    pub photo: Option<String>,
    pub age_range: AgeRange,
    pub gender: String,
    pub kind: VisitorKind,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Account,
    #[sea_orm(has_many = "super::shopper_category::Entity")]
    ShopperCategory,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::favorite_product::Entity")]
    FavoriteProduct,
    #[sea_orm(has_many = "super::favorite_store::Entity")]
    FavoriteStore,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::shopper_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::shopper_category::Relation::Shopper.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
