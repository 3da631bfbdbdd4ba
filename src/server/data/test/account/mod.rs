use entity::sea_orm_active_enums::AccountRole;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::account::AccountRepository;

mod create;
mod delete;
