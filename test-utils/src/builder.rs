use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Account, Shopper};
///
/// let test = TestBuilder::new()
///     .with_table(Account)
///     .with_table(Shopper)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after every table exists.
    indexes: Vec<IndexCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax, including the foreign keys declared on its `belongs_to` relations.
    /// Tables should be added in dependency order (tables with foreign keys after their
    /// referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity definition does not carry.
    ///
    /// Migrations declare composite unique keys separately from the tables, so tests that
    /// depend on them add the same index here.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the tables needed for authentication: accounts, the two profile kinds and
    /// the token revocation list.
    pub fn with_account_tables(self) -> Self {
        self.with_table(Account)
            .with_table(StoreOwner)
            .with_table(Category)
            .with_table(Shopper)
            .with_table(ShopperCategory)
            .with_table(RevokedToken)
    }

    /// Adds every table of the directory schema in dependency order.
    ///
    /// Use this for service and controller tests that touch stores, products,
    /// reviews, favorites, kiosk surveys or the audit log.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_directory_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_directory_tables(self) -> Self {
        self.with_account_tables()
            .with_table(Sector)
            .with_table(Store)
            .with_table(StoreCategory)
            .with_table(Product)
            .with_table(ProductCategory)
            .with_table(Review)
            .with_table(FavoriteProduct)
            .with_table(FavoriteStore)
            .with_table(KioskSurvey)
            .with_table(UserAction)
            .with_index(
                Index::create()
                    .name("idx_favorite_product_shopper_product")
                    .table(FavoriteProduct)
                    .col(entity::favorite_product::Column::ShopperId)
                    .col(entity::favorite_product::Column::ProductId)
                    .unique()
                    .to_owned(),
            )
            .with_index(
                Index::create()
                    .name("idx_favorite_store_shopper_store")
                    .table(FavoriteStore)
                    .col(entity::favorite_store::Column::ShopperId)
                    .col(entity::favorite_store::Column::StoreId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
