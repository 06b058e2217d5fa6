use super::*;

/// Tests deleting a customer together with its dependent records.
///
/// Seeds a customer with a profile and an order holding one product, then
/// verifies the profile, order, and join rows are removed while the product
/// itself survives.
#[tokio::test]
async fn deletes_customer_with_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_order_tables()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;
    ProfileFactory::new(db, customer.id).build().await?;
    let product = ProductFactory::new(db).build().await?;
    let order = OrderFactory::new(db, customer.id)
        .product_ids(vec![product.id])
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    assert!(repo.delete(customer.id).await?);

    assert!(entity::prelude::Customer::find_by_id(customer.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Profile::find()
        .filter(entity::profile::Column::CustomerId.eq(customer.id))
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Order::find_by_id(order.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::OrderProduct::find()
        .filter(entity::order_product::Column::OrderId.eq(order.id))
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a customer that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    assert!(!repo.delete(999999).await?);

    Ok(())
}
