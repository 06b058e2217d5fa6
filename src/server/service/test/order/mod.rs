use crate::{
    model::order::{CreateOrderDto, UpdateOrderDto},
    server::{error::AppError, service::order::OrderService},
};
use chrono::Utc;
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use test_utils::{builder::TestBuilder, factory};

mod add_product;
mod update;
