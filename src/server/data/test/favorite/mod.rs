use sea_orm::{DbErr, SqlErr};
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::favorite::{FavoriteProductRepository, FavoriteStoreRepository};

mod create;
mod find_all;
