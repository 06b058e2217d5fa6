use super::*;

/// Tests creating a profile for an existing customer.
#[tokio::test]
async fn creates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;

    let repo = ProfileRepository::new(db);
    let profile = repo
        .create(CreateProfileParams {
            customer_id: customer.id,
            address: "100 Main Street, Apt 4".to_string(),
            phone: "(11) 98765-4321".to_string(),
            city: Some("Springfield".to_string()),
            state: Some("SP".to_string()),
            zip_code: Some("12345-678".to_string()),
        })
        .await?;

    assert_eq!(profile.customer_id, customer.id);
    assert_eq!(profile.address, "100 Main Street, Apt 4");
    assert_eq!(profile.phone, "(11) 98765-4321");
    assert_eq!(profile.city.as_deref(), Some("Springfield"));
    assert_eq!(profile.state.as_deref(), Some("SP"));
    assert_eq!(profile.zip_code.as_deref(), Some("12345-678"));

    Ok(())
}

/// Tests the unique constraint on customer_id, one profile per customer.
///
/// Expected: Err(DbErr) for a second profile on the same customer
#[tokio::test]
async fn rejects_second_profile_for_customer() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;
    ProfileFactory::new(db, customer.id).build().await?;

    let repo = ProfileRepository::new(db);
    let result = repo
        .create(CreateProfileParams {
            customer_id: customer.id,
            address: "200 Other Avenue, Suite 1".to_string(),
            phone: "(21) 91234-5678".to_string(),
            city: None,
            state: None,
            zip_code: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
