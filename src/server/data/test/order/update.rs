use super::*;

/// Tests writing a new status and total to an existing order.
///
/// Expected: Ok(Some) with both columns updated
#[tokio::test]
async fn updates_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;
    let order = OrderFactory::new(db, customer.id).build().await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update(order.id, OrderStatus::Delivered, Decimal::new(9900, 2))
        .await?
        .unwrap();

    assert_eq!(updated.id, order.id);
    assert_eq!(updated.status, OrderStatus::Delivered);
    assert_eq!(updated.total_amount, Decimal::new(9900, 2));

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);
    let result = repo
        .update(999999, OrderStatus::Processing, Decimal::ZERO)
        .await?;

    assert!(result.is_none());

    Ok(())
}
