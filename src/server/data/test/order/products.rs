use super::*;

/// Tests replacing an order's product set.
///
/// Expected: only the new set remains associated after set_products
#[tokio::test]
async fn replaces_product_set() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;
    let order = OrderFactory::new(db, customer.id)
        .product_ids(vec![products[0].id])
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    repo.set_products(order.id, &[products[1].id]).await?;

    let associated = repo.get_products(&order).await?;
    assert_eq!(associated, vec![products[1].clone()]);

    Ok(())
}

/// Tests that a failed replacement keeps the previous product set.
///
/// A repeated product id makes the second insert violate the composite
/// primary key; the delete that preceded it must be rolled back.
#[tokio::test]
async fn set_products_keeps_previous_set_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;
    let order = OrderFactory::new(db, customer.id)
        .product_ids(vec![products[0].id])
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo
        .set_products(order.id, &[products[1].id, products[1].id])
        .await;

    assert!(result.is_err());

    let associated = repo.get_products(&order).await?;
    assert_eq!(associated, vec![products[0].clone()]);

    Ok(())
}

/// Tests adding a product to an order and the membership check.
#[tokio::test]
async fn adds_product_to_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;
    let order = OrderFactory::new(db, customer.id).build().await?;

    let repo = OrderRepository::new(db);
    assert!(!repo.contains_product(order.id, products[0].id).await?);

    repo.add_product(order.id, products[0].id).await?;

    assert!(repo.contains_product(order.id, products[0].id).await?);

    Ok(())
}

/// Tests that the composite primary key rejects a duplicate association.
#[tokio::test]
async fn rejects_duplicate_association() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (customer, products) = factory::helpers::create_order_dependencies(db).await?;
    let order = OrderFactory::new(db, customer.id)
        .product_ids(vec![products[0].id])
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let result = repo.add_product(order.id, products[0].id).await;

    assert!(result.is_err());

    Ok(())
}
