//! Orderboard Test Utils
//!
//! Shared testing utilities for the orderboard backend. Provides a builder
//! for creating test contexts backed by in-memory SQLite databases, plus
//! per-entity factories that cut boilerplate when seeding test data.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_order_operations() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_order_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
