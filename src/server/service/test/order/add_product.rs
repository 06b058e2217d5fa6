use super::*;

/// Tests adding a product to an existing order.
///
/// Expected: the product joins the set and the total is recomputed
#[tokio::test]
async fn add_product_recomputes_total() -> Result<(), AppError> {
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
            product_ids: vec![products[0].id],
        })
        .await?;
    assert_eq!(order.total_amount, Decimal::new(1000, 2));

    let updated = service
        .add_product(order.id, products[1].id)
        .await?
        .unwrap();

    assert_eq!(updated.total_amount, Decimal::new(1550, 2));
    assert_eq!(updated.products.len(), 2);

    Ok(())
}

/// Tests adding a product that is already on the order.
///
/// Expected: Err(AppError::BadRequest) and the total untouched
#[tokio::test]
async fn add_product_rejects_duplicate() -> Result<(), AppError> {
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
            product_ids: vec![products[0].id],
        })
        .await?;

    let result = service.add_product(order.id, products[0].id).await;
    assert!(matches!(result, Err(AppError::BadRequest(_))));

    let unchanged = service.get_by_id(order.id).await?.unwrap();
    assert_eq!(unchanged.total_amount, Decimal::new(1000, 2));

    Ok(())
}

/// Tests adding a product to an order that does not exist, and adding a
/// product that does not exist to an order.
///
/// Expected: Ok(None) in both cases
#[tokio::test]
async fn add_product_returns_none_for_missing_rows() -> Result<(), AppError> {
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
            product_ids: Vec::new(),
        })
        .await?;

    assert!(service.add_product(999999, products[0].id).await?.is_none());
    assert!(service.add_product(order.id, 999999).await?.is_none());

    Ok(())
}
