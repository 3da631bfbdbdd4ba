//! Domain models and operation parameters.
//!
//! Domain models are built from SeaORM entities at the repository/service boundary
//! (`from_entity`) and turned into wire DTOs at the controller boundary (`into_dto`).
//! Models whose response carries per-request computed fields take a `Viewer` in
//! `into_dto`, so the same store or product renders differently per requesting account.

pub mod account;
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
