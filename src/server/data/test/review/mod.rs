use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::review::ReviewRepository;

mod active_ratings_for;
mod get_by_store_paginated;
