//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically create required parents (an
//! account for a shopper, an owner for a store, a store for a product) unless one is
//! supplied explicitly.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let category = factory::create_category(db).await?;
//!     let (owner, store) = factory::helpers::create_store_with_owner(db).await?;
//!
//!     let product = factory::product::ProductFactory::new(db, store.id)
//!         .name("Tenis de corrida")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `account` - Login identities
//! - `category` / `sector` - Named tags and groupings
//! - `store_owner` / `shopper` - Profiles (create their account on demand)
//! - `store` / `product` - Catalogue entries
//! - `review` - Store ratings
//! - `favorite` - Favorite-product and favorite-store rows
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod account;
pub mod category;
pub mod favorite;
pub mod helpers;
pub mod product;
pub mod review;
pub mod sector;
pub mod shopper;
pub mod store;
pub mod store_owner;

// Re-export commonly used factory functions for concise usage
pub use account::create_account;
pub use category::{create_category, create_category_named};
pub use favorite::{create_favorite_product, create_favorite_store};
pub use product::create_product;
pub use review::create_review;
pub use sector::create_sector;
pub use shopper::create_shopper;
pub use store::create_store;
pub use store_owner::create_store_owner;
