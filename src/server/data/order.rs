use chrono::{DateTime, Utc};
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order together with its product associations, in one
    /// transaction so a failed association insert leaves no partial order.
    ///
    /// # Arguments
    /// - `customer_id`: Owning customer (must exist)
    /// - `status`: Initial order status
    /// - `order_date`: Timestamp recorded for the order
    /// - `total_amount`: Precomputed total over `product_ids`
    /// - `product_ids`: Products to associate (deduplicated by the caller)
    pub async fn create(
        &self,
        customer_id: i32,
        status: OrderStatus,
        order_date: DateTime<Utc>,
        total_amount: Decimal,
        product_ids: &[i32],
    ) -> Result<entity::order::Model, DbErr> {
        let txn = self.db.begin().await?;

        let order = entity::order::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            status: ActiveValue::Set(status),
            order_date: ActiveValue::Set(order_date),
            total_amount: ActiveValue::Set(total_amount),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        for product_id in product_ids {
            entity::order_product::ActiveModel {
                order_id: ActiveValue::Set(order.id),
                product_id: ActiveValue::Set(*product_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(order)
    }

    pub async fn get_all(&self) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.db).await
    }

    /// Products currently associated with the order, via the join table.
    pub async fn get_products(
        &self,
        order: &entity::order::Model,
    ) -> Result<Vec<entity::product::Model>, DbErr> {
        order
            .find_related(entity::prelude::Product)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_customer_id(
        &self,
        customer_id: i32,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::CustomerId.eq(customer_id))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn find_by_status(
        &self,
        status: OrderStatus,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::Status.eq(status))
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await
    }

    /// Inclusive order-date range query.
    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<entity::order::Model>, DbErr> {
        entity::prelude::Order::find()
            .filter(entity::order::Column::OrderDate.between(start, end))
            .order_by_asc(entity::order::Column::OrderDate)
            .all(self.db)
            .await
    }

    /// Replaces the order's product set with `product_ids`. Runs in one
    /// transaction; on failure the previous set stays in place.
    pub async fn set_products(&self, order_id: i32, product_ids: &[i32]) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::OrderId.eq(order_id))
            .exec(&txn)
            .await?;

        for product_id in product_ids {
            entity::order_product::ActiveModel {
                order_id: ActiveValue::Set(order_id),
                product_id: ActiveValue::Set(*product_id),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        Ok(())
    }

    pub async fn contains_product(&self, order_id: i32, product_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::OrderProduct::find_by_id((order_id, product_id))
            .one(self.db)
            .await?
            .is_some())
    }

    /// Adds a single product to the order's product set. The caller checks
    /// for duplicates first; the composite primary key rejects them here.
    pub async fn add_product(&self, order_id: i32, product_id: i32) -> Result<(), DbErr> {
        entity::order_product::ActiveModel {
            order_id: ActiveValue::Set(order_id),
            product_id: ActiveValue::Set(product_id),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Writes the status and total of an existing order.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The updated order
    /// - `Ok(None)`: Order not found
    pub async fn update(
        &self,
        id: i32,
        status: OrderStatus,
        total_amount: Decimal,
    ) -> Result<Option<entity::order::Model>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::order::ActiveModel = order.into();
        active.status = ActiveValue::Set(status);
        active.total_amount = ActiveValue::Set(total_amount);

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes an order and its product associations in one transaction.
    ///
    /// # Returns
    /// - `Ok(true)`: Order deleted
    /// - `Ok(false)`: Order not found
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        if entity::prelude::Order::find_by_id(id)
            .one(self.db)
            .await?
            .is_none()
        {
            return Ok(false);
        }

        let txn = self.db.begin().await?;

        entity::prelude::OrderProduct::delete_many()
            .filter(entity::order_product::Column::OrderId.eq(id))
            .exec(&txn)
            .await?;

        entity::prelude::Order::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(true)
    }
}
