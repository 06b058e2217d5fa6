use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, DbErr};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::factory::{customer::CustomerFactory, product::ProductFactory};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// Returns a process-wide unique sequence number for default field values,
/// so factory-created rows never collide on unique columns.
pub fn next_id() -> usize {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Creates the rows most order tests need: one customer and two products
/// priced 10.00 and 5.50.
pub async fn create_order_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::customer::Model, Vec<entity::product::Model>), DbErr> {
    let customer = CustomerFactory::new(db).build().await?;

    let first = ProductFactory::new(db)
        .price(Decimal::new(1000, 2))
        .build()
        .await?;
    let second = ProductFactory::new(db)
        .price(Decimal::new(550, 2))
        .build()
        .await?;

    Ok((customer, vec![first, second]))
}
