use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::AccountRole;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub role: AccountRole,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::shopper::Entity")]
    Shopper,
    #[sea_orm(has_one = "super::store_owner::Entity")]
    StoreOwner,
    #[sea_orm(has_many = "super::user_action::Entity")]
    UserAction,
    #[sea_orm(has_many = "super::revoked_token::Entity")]
    RevokedToken,
}

impl Related<super::shopper::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Shopper.def()
    }
}

impl Related<super::store_owner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::StoreOwner.def()
    }
}

impl Related<super::user_action::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserAction.def()
    }
}

impl Related<super::revoked_token::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RevokedToken.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
