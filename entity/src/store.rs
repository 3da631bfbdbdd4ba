use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "store")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub sector_id: Option<i32>,
    pub name: String,
    /// Lowercased `name`, matched by the `nome` filter
    pub name_search: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub banner: Option<String>,
    pub logo: Option<String>,
    pub photo: Option<String>,
    pub location: String,
    pub opening_hours: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub social_links: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::store_owner::Entity",
        from = "Column::OwnerId",
        to = "super::store_owner::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    StoreOwner,
    #[sea_orm(
        belongs_to = "super::sector::Entity",
        from = "Column::SectorId",
        to = "super::sector::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Sector,
    #[sea_orm(has_many = "super::product::Entity")]
    Product,
    #[sea_orm(has_many = "super::review::Entity")]
    Review,
    #[sea_orm(has_many = "super::store_category::Entity")]
    StoreCategory,
    #[sea_orm(has_many = "super::favorite_store::Entity")]
    FavoriteStore,
}

impl Related<super::store_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreOwner.def()
    }
}

impl Related<super::sector::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sector.def()
    }
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        super::store_category::Relation::Category.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::store_category::Relation::Store.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
