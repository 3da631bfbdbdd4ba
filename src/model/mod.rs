//! Wire DTOs shared by the HTTP API.
//!
//! Field names follow the public JSON contract, which is in Portuguese. Request DTOs
//! carry `validator` rules; response DTOs are built from server domain models via
//! `into_dto`.

pub mod account;
pub mod api;
pub mod category;
pub mod favorite;
pub mod kiosk;
pub mod product;
pub mod review;
pub mod search;
pub mod sector;
pub mod shopper;
pub mod store;
pub mod store_owner;
pub mod user_action;
