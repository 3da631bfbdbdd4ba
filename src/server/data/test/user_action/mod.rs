use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::user_action::UserActionRepository,
    model::user_action::{RecordUserActionParams, VIEWED_PRODUCT, VIEWED_STORE},
};

mod find_all;
