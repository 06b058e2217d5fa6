use super::*;

/// Tests fetching a customer by id.
///
/// Expected: Ok(Some) for an existing id, Ok(None) otherwise
#[tokio::test]
async fn gets_customer_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;

    let repo = CustomerRepository::new(db);
    let found = repo.get_by_id(customer.id).await?;
    assert_eq!(found, Some(customer));

    let missing = repo.get_by_id(999999).await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests listing all customers ordered by id.
#[tokio::test]
async fn gets_all_customers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CustomerFactory::new(db).build().await?;
    let second = CustomerFactory::new(db).build().await?;

    let repo = CustomerRepository::new(db);
    let customers = repo.get_all().await?;

    assert_eq!(customers, vec![first, second]);

    Ok(())
}

/// Tests the exact-match email lookup used for the uniqueness check.
#[tokio::test]
async fn finds_customer_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db)
        .email("lookup@example.com")
        .build()
        .await?;

    let repo = CustomerRepository::new(db);
    let found = repo.find_by_email("lookup@example.com").await?;
    assert_eq!(found, Some(customer));

    let missing = repo.find_by_email("other@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
