//! SeaORM entity definitions for the mall directory schema.

pub mod prelude;

pub mod account;
pub mod category;
pub mod favorite_product;
pub mod favorite_store;
pub mod kiosk_survey;
pub mod product;
pub mod product_category;
pub mod revoked_token;
pub mod review;
pub mod sea_orm_active_enums;
pub mod sector;
pub mod shopper;
pub mod shopper_category;
pub mod store;
pub mod store_category;
pub mod store_owner;
pub mod user_action;
