use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::data::revoked_token::RevokedTokenRepository;

mod purge_expired;
mod revoke;
