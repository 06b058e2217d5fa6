//! Business logic layer between controllers and repositories.
//!
//! Services own field validation, referential checks (existing customer,
//! existing products, one profile per customer, unique email), the order
//! defaults (status NEW, order date = now), and the order-total computation.

pub mod customer;
pub mod order;
pub mod product;
pub mod profile;

#[cfg(test)]
mod test;
