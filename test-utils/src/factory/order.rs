use chrono::{DateTime, Utc};
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for test orders.
///
/// Defaults: `status` = NEW, `order_date` = now, `total_amount` = 0, no
/// associated products. `product_ids` seeds join-table rows; the total is
/// not derived from them, set it explicitly when a test depends on it.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    customer_id: i32,
    status: OrderStatus,
    order_date: DateTime<Utc>,
    total_amount: Decimal,
    product_ids: Vec<i32>,
}

impl<'a> OrderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, customer_id: i32) -> Self {
        Self {
            db,
            customer_id,
            status: OrderStatus::New,
            order_date: Utc::now(),
            total_amount: Decimal::ZERO,
            product_ids: Vec::new(),
        }
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn order_date(mut self, order_date: DateTime<Utc>) -> Self {
        self.order_date = order_date;
        self
    }

    pub fn total_amount(mut self, total_amount: Decimal) -> Self {
        self.total_amount = total_amount;
        self
    }

    pub fn product_ids(mut self, product_ids: Vec<i32>) -> Self {
        self.product_ids = product_ids;
        self
    }

    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(self.customer_id),
            status: ActiveValue::Set(self.status),
            order_date: ActiveValue::Set(self.order_date),
            total_amount: ActiveValue::Set(self.total_amount),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for product_id in self.product_ids {
            entity::order_product::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(product_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(order)
    }
}
