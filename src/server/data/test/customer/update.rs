use super::*;

/// Tests updating the name and email of an existing customer.
///
/// Expected: Ok(Some) with both fields overwritten
#[tokio::test]
async fn updates_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;

    let repo = CustomerRepository::new(db);
    let updated = repo
        .update(
            customer.id,
            "Renamed".to_string(),
            "renamed@example.com".to_string(),
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, customer.id);
    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, "renamed@example.com");

    Ok(())
}

/// Tests updating a customer that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Customer)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CustomerRepository::new(db);
    let result = repo
        .update(999999, "Ghost".to_string(), "ghost@example.com".to_string())
        .await?;

    assert!(result.is_none());

    Ok(())
}
