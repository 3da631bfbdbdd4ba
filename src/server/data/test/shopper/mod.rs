use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::shopper::ShopperRepository, model::shopper::UpdateShopperParams};

mod set_desired_categories;
mod update;
