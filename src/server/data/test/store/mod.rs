use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::store::StoreRepository, model::store::CreateStoreParams};

mod create;
mod delete;
mod find_all;
mod find_by_category_ids;
mod update;

fn store_params(owner_id: i32, name: &str, category_ids: Vec<i32>) -> CreateStoreParams {
    CreateStoreParams {
        owner_id,
        sector_id: None,
        name: name.to_string(),
        description: String::new(),
        banner: None,
        logo: None,
        photo: None,
        location: "Piso 1".to_string(),
        opening_hours: "10h-22h".to_string(),
        social_links: None,
        category_ids,
    }
}
