use chrono::{DateTime, Utc};
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::product::ProductDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct OrderDto {
    pub id: i32,
    pub customer_id: i32,
    pub customer_name: String,
    #[schema(value_type = String, example = "NEW")]
    pub status: OrderStatus,
    pub order_date: DateTime<Utc>,
    pub total_amount: Decimal,
    pub products: Vec<ProductDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateOrderDto {
    pub customer_id: i32,
    #[serde(default)]
    pub product_ids: Vec<i32>,
}

/// Update payload. A `product_ids` value replaces the order's product set
/// and triggers a total recomputation; `None` leaves the set untouched.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateOrderDto {
    #[schema(value_type = Option<String>, example = "SHIPPED")]
    pub status: Option<OrderStatus>,
    pub product_ids: Option<Vec<i32>>,
}
