//! Factories for seeding test entities with sensible defaults.
//!
//! Each factory follows a builder pattern: construct with the required
//! foreign keys, override the fields the test cares about, then `build()`.

pub mod customer;
pub mod helpers;
pub mod order;
pub mod product;
pub mod profile;
