use super::*;

/// Tests creating a new customer.
///
/// Expected: Ok with the provided name and email persisted
#[tokio::test]
async fn creates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let customer = repo
        .create("Alice Example".to_string(), "alice@example.com".to_string())
        .await?;

    assert_eq!(customer.name, "Alice Example");
    assert_eq!(customer.email, "alice@example.com");
    assert!(customer.id > 0);

    Ok(())
}

/// Tests the unique constraint on email.
///
/// Expected: Err(DbErr) when inserting a second customer with the same email
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    repo.create("Alice".to_string(), "same@example.com".to_string())
        .await?;

    let result = repo
        .create("Bob".to_string(), "same@example.com".to_string())
        .await;

    assert!(result.is_err());

    Ok(())
}
