//! Database repository layer for all domain entities.
//!
//! Repository structs handle the persistence operations for each entity.
//! They work on SeaORM entity models and leave DTO conversion and business
//! rules to the service layer above.

pub mod customer;
pub mod order;
pub mod product;
pub mod profile;
