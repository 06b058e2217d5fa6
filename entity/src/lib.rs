//! SeaORM entity models for the order-management domain.
//!
//! Relationships:
//! - `customer` 1:1 `profile` (unique `profile.customer_id`)
//! - `customer` 1:N `orders`
//! - `orders` N:M `products` through the `order_product` join table

pub mod customer;
pub mod order;
pub mod order_product;
pub mod order_status;
pub mod prelude;
pub mod product;
pub mod profile;
