use entity::sea_orm_active_enums::{AgeRange, VisitorKind};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{category::CategoryRepository, kiosk_survey::KioskSurveyRepository},
    model::{
        category::{CreateCategoryParams, UpdateCategoryParams},
        kiosk::CreateKioskSurveyParams,
    },
};

mod create;
mod delete;
mod update;
