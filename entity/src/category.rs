use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub name_search: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::store_category::Entity")]
    StoreCategory,
    #[sea_orm(has_many = "super::product_category::Entity")]
    ProductCategory,
    #[sea_orm(has_many = "super::shopper_category::Entity")]
    ShopperCategory,
    #[sea_orm(has_many = "super::kiosk_survey::Entity")]
    KioskSurvey,
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        super::store_category::Relation::Store.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::store_category::Relation::Category.def().rev())
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_category::Relation::Product.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_category::Relation::Category.def().rev())
    }
}

impl Related<super::kiosk_survey::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KioskSurvey.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
