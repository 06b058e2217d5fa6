use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Customer, Product};
///
/// let test = TestBuilder::new()
///     .with_table(Customer)
///     .with_table(Product)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order: tables with foreign keys
    /// after the tables they reference.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the tables required for order operations, in dependency order:
    /// Customer, Product, Order, OrderProduct.
    pub fn with_order_tables(self) -> Self {
        self.with_table(Customer)
            .with_table(Product)
            .with_table(Order)
            .with_table(OrderProduct)
    }

    /// Adds the tables required for profile operations, in dependency order:
    /// Customer, Profile.
    pub fn with_profile_tables(self) -> Self {
        self.with_table(Customer).with_table(Profile)
    }

    /// Creates the test context and executes the configured CREATE TABLE
    /// statements against a fresh in-memory database.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
