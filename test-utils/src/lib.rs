//! Mall Directory Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the mall
//! directory backend. This crate offers a builder pattern for creating test contexts with
//! in-memory SQLite databases and factories for every entity in the schema.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Category;
//!
//! #[tokio::test]
//! async fn test_category_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Category)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
