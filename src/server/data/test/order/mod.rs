use crate::server::data::order::OrderRepository;
use chrono::{Duration, Utc};
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{
    builder::TestBuilder,
    factory::{self, customer::CustomerFactory, order::OrderFactory},
};

mod products;
mod update;
