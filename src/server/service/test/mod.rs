use entity::sea_orm_active_enums::{AccountRole, AgeRange, VisitorKind};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    model::account::{RegisterShopperParams, RegisterStoreOwnerParams},
};

mod account;
mod auth;
mod favorite;
mod recommendation;
mod search;
mod store;
mod user_action;

fn shopper_registration(email: &str, desired_category_ids: Vec<i32>) -> RegisterShopperParams {
    RegisterShopperParams {
        email: email.to_string(),
        password: "correct horse battery".to_string(),
        name: "Maria Silva".to_string(),
        phone: "(11) 99999-0000".to_string(),
        photo: None,
        age_range: AgeRange::From26To35,
        gender: "F".to_string(),
        kind: VisitorKind::Local,
        desired_category_ids,
    }
}

fn store_owner_registration(email: &str) -> RegisterStoreOwnerParams {
    RegisterStoreOwnerParams {
        email: email.to_string(),
        password: "correct horse battery".to_string(),
        name: "Joao Lojista".to_string(),
        phone: "(11) 98888-0000".to_string(),
        tax_id: "123.456.789-00".to_string(),
        photo: None,
    }
}

async fn account_count(db: &DatabaseConnection) -> u64 {
    entity::prelude::Account::find().count(db).await.unwrap()
}
