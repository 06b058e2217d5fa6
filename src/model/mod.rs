//! JSON DTOs exchanged over the REST API.
//!
//! DTOs control exactly what crosses the API boundary; entity models never
//! serialize directly. Each entity has a read DTO plus create/update payloads.

pub mod api;
pub mod customer;
pub mod order;
pub mod product;
pub mod profile;
