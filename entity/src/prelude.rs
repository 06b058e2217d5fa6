pub use super::customer::Entity as Customer;
pub use super::order::Entity as Order;
pub use super::order_product::Entity as OrderProduct;
pub use super::order_status::OrderStatus;
pub use super::product::Entity as Product;
pub use super::profile::Entity as Profile;
