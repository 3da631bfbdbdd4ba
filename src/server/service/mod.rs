//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Reference checks, uniqueness rules, rating aggregation,
//!   recommendation and search
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Registration writes the account and profile atomically

pub mod account;
pub mod auth;
pub mod category;
pub mod favorite;
pub mod kiosk;
pub mod product;
pub mod recommendation;
pub mod review;
pub mod search;
pub mod sector;
pub mod shopper;
pub mod store;
pub mod store_owner;
pub mod token;
pub mod user_action;

#[cfg(test)]
mod test;
