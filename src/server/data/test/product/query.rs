use super::*;

/// Tests the bulk id lookup.
///
/// Expected: only existing rows come back, an empty input yields an empty vec
#[tokio::test]
async fn gets_products_by_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = ProductFactory::new(db).build().await?;
    let second = ProductFactory::new(db).build().await?;

    let repo = ProductRepository::new(db);
    let products = repo.get_by_ids(&[first.id, second.id, 999999]).await?;
    assert_eq!(products.len(), 2);

    let empty = repo.get_by_ids(&[]).await?;
    assert!(empty.is_empty());

    Ok(())
}

/// Tests the case-insensitive substring search on name.
#[tokio::test]
async fn finds_products_by_name_containing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let laptop = ProductFactory::new(db)
        .name("Gaming Laptop")
        .build()
        .await?;
    ProductFactory::new(db).name("Desk Lamp").build().await?;

    let repo = ProductRepository::new(db);
    let products = repo.find_by_name_containing("LAPTOP").await?;

    assert_eq!(products, vec![laptop]);

    Ok(())
}

/// Tests the inclusive price range query and its price ordering.
#[tokio::test]
async fn finds_products_by_price_range() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Product)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cheap = ProductFactory::new(db)
        .price(Decimal::new(500, 2))
        .build()
        .await?;
    let mid = ProductFactory::new(db)
        .price(Decimal::new(2000, 2))
        .build()
        .await?;
    ProductFactory::new(db)
        .price(Decimal::new(9900, 2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let products = repo
        .find_by_price_range(Decimal::new(500, 2), Decimal::new(2000, 2))
        .await?;

    assert_eq!(products, vec![cheap, mid]);

    Ok(())
}
