use chrono::{DateTime, Utc};
use entity::order_status::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
        product::ProductDto,
    },
    server::{
        data::{
            customer::CustomerRepository, order::OrderRepository, product::ProductRepository,
        },
        error::AppError,
    },
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an order for an existing customer.
    ///
    /// New orders start as `NEW` with the order date set to the current time.
    /// The total is the sum of the prices of the associated products; an
    /// order without products totals zero.
    pub async fn create(&self, dto: CreateOrderDto) -> Result<OrderDto, AppError> {
        if CustomerRepository::new(self.db)
            .get_by_id(dto.customer_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Customer {} does not exist",
                dto.customer_id
            )));
        }

        let mut product_ids = dto.product_ids;
        product_ids.sort_unstable();
        product_ids.dedup();

        let products = self.resolve_products(&product_ids).await?;
        let total = Self::compute_total(&products);

        let order = OrderRepository::new(self.db)
            .create(
                dto.customer_id,
                OrderStatus::New,
                Utc::now(),
                total,
                &product_ids,
            )
            .await?;

        self.to_dto(order).await
    }

    pub async fn list_all(&self) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db).get_all().await?;

        self.to_dtos(orders).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<OrderDto>, AppError> {
        let Some(order) = OrderRepository::new(self.db).get_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(self.to_dto(order).await?))
    }

    /// Updates an order's status and/or product set.
    ///
    /// Replacing the product set recomputes and persists the total over the
    /// new set.
    pub async fn update(&self, id: i32, dto: UpdateOrderDto) -> Result<Option<OrderDto>, AppError> {
        let repo = OrderRepository::new(self.db);
        let Some(order) = repo.get_by_id(id).await? else {
            return Ok(None);
        };

        let mut total = order.total_amount;
        if let Some(mut product_ids) = dto.product_ids {
            product_ids.sort_unstable();
            product_ids.dedup();

            let products = self.resolve_products(&product_ids).await?;
            total = Self::compute_total(&products);

            repo.set_products(order.id, &product_ids).await?;
        }

        let status = dto.status.unwrap_or(order.status);
        let updated = repo
            .update(id, status, total)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        Ok(Some(self.to_dto(updated).await?))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(OrderRepository::new(self.db).delete(id).await?)
    }

    pub async fn find_by_customer_id(&self, customer_id: i32) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db)
            .find_by_customer_id(customer_id)
            .await?;

        self.to_dtos(orders).await
    }

    pub async fn find_by_status(&self, status: OrderStatus) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db).find_by_status(status).await?;

        self.to_dtos(orders).await
    }

    pub async fn find_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<OrderDto>, AppError> {
        let orders = OrderRepository::new(self.db)
            .find_by_date_range(start, end)
            .await?;

        self.to_dtos(orders).await
    }

    /// Adds a product to an order and recomputes the persisted total.
    ///
    /// # Returns
    /// - `Ok(Some(OrderDto))`: Product added, total recomputed
    /// - `Ok(None)`: Order or product not found
    /// - `Err(AppError::BadRequest)`: Product is already on the order
    pub async fn add_product(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<OrderDto>, AppError> {
        let repo = OrderRepository::new(self.db);
        let Some(order) = repo.get_by_id(order_id).await? else {
            return Ok(None);
        };
        if ProductRepository::new(self.db)
            .get_by_id(product_id)
            .await?
            .is_none()
        {
            return Ok(None);
        }

        if repo.contains_product(order_id, product_id).await? {
            return Err(AppError::BadRequest(format!(
                "Product {} is already on order {}",
                product_id, order_id
            )));
        }

        repo.add_product(order_id, product_id).await?;

        let products = repo.get_products(&order).await?;
        let total = Self::compute_total(&products);

        let updated = repo
            .update(order_id, order.status, total)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        Ok(Some(self.to_dto(updated).await?))
    }

    /// Total = Σ(product.price) over the current product set.
    fn compute_total(products: &[entity::product::Model]) -> Decimal {
        products.iter().map(|product| product.price).sum()
    }

    /// Fetches the products for the given ids, rejecting unknown ids.
    async fn resolve_products(
        &self,
        product_ids: &[i32],
    ) -> Result<Vec<entity::product::Model>, AppError> {
        let products = ProductRepository::new(self.db)
            .get_by_ids(product_ids)
            .await?;

        if products.len() != product_ids.len() {
            let found: Vec<i32> = products.iter().map(|product| product.id).collect();
            let missing: Vec<String> = product_ids
                .iter()
                .filter(|id| !found.contains(id))
                .map(|id| id.to_string())
                .collect();

            return Err(AppError::BadRequest(format!(
                "Unknown product ids: {}",
                missing.join(", ")
            )));
        }

        Ok(products)
    }

    async fn to_dtos(&self, orders: Vec<entity::order::Model>) -> Result<Vec<OrderDto>, AppError> {
        let mut dtos = Vec::with_capacity(orders.len());
        for order in orders {
            dtos.push(self.to_dto(order).await?);
        }

        Ok(dtos)
    }

    /// Enriches an order with its customer name and product list.
    async fn to_dto(&self, order: entity::order::Model) -> Result<OrderDto, AppError> {
        let customer = CustomerRepository::new(self.db)
            .get_by_id(order.customer_id)
            .await?
            .ok_or_else(|| {
                AppError::InternalError(format!(
                    "Order {} references missing customer {}",
                    order.id, order.customer_id
                ))
            })?;

        let products = OrderRepository::new(self.db)
            .get_products(&order)
            .await?
            .into_iter()
            .map(ProductDto::from)
            .collect();

        Ok(OrderDto {
            id: order.id,
            customer_id: order.customer_id,
            customer_name: customer.name,
            status: order.status,
            order_date: order.order_date,
            total_amount: order.total_amount,
            products,
        })
    }
}
