use super::*;

/// Tests replacing the product set, which must recompute the total.
#[tokio::test]
async fn update_recomputes_total_for_new_product_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;

    let service = OrderService::new(db);
    let order = service
        .create(CreateOrderDto {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id).collect(),
        })
        .await?;

    let updated = service
        .update(
            order.id,
            UpdateOrderDto {
                status: None,
                product_ids: Some(vec![products[1].id]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.total_amount, Decimal::new(550, 2));
    assert_eq!(updated.products.len(), 1);
    assert_eq!(updated.status, OrderStatus::New);

    Ok(())
}

/// Tests a status-only update.
///
/// Expected: the status changes while the product set and total stay put
#[tokio::test]
async fn update_status_keeps_products_and_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;

    let service = OrderService::new(db);
    let order = service
        .create(CreateOrderDto {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id).collect(),
        })
        .await?;

    let updated = service
        .update(
            order.id,
            UpdateOrderDto {
                status: Some(OrderStatus::Shipped),
                product_ids: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Shipped);
    assert_eq!(updated.total_amount, Decimal::new(1550, 2));
    assert_eq!(updated.products.len(), 2);

    Ok(())
}

/// Tests clearing the product set.
///
/// Expected: total drops to zero
#[tokio::test]
async fn update_with_empty_set_zeroes_total() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;

    let service = OrderService::new(db);
    let order = service
        .create(CreateOrderDto {
            customer_id: customer.id,
            product_ids: products.iter().map(|p| p.id).collect(),
        })
        .await?;

    let updated = service
        .update(
            order.id,
            UpdateOrderDto {
                status: None,
                product_ids: Some(Vec::new()),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.total_amount, Decimal::ZERO);
    assert!(updated.products.is_empty());

    Ok(())
}

/// Tests updating an order that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn update_returns_none_for_missing_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = OrderService::new(db);
    let result = service
        .update(
            999999,
            UpdateOrderDto {
                status: Some(OrderStatus::Canceled),
                product_ids: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
