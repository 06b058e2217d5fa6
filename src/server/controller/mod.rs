//! HTTP request handlers.
//!
//! Handlers extract request data, delegate to the service layer, and shape
//! responses: 200 for reads and updates, 201 for creates, 204 for deletes,
//! with errors mapped through `AppError::into_response`.

pub mod customer;
pub mod order;
pub mod product;
pub mod profile;
