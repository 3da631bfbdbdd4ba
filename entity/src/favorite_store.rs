use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorite_store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub shopper_id: i32,
    pub store_id: i32,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::shopper::Entity",
        from = "Column::ShopperId",
        to = "super::shopper::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Shopper,
    #[sea_orm(
        belongs_to = "super::store::Entity",
        from = "Column::StoreId",
        to = "super::store::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Store,
}

impl Related<super::shopper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shopper.def()
    }
}

impl Related<super::store::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Store.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
