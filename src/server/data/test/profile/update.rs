use super::*;

/// Tests updating the contact fields of an existing profile.
///
/// Expected: Ok(Some) with the new values, customer_id unchanged
#[tokio::test]
async fn updates_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;
    let profile = ProfileFactory::new(db, customer.id).build().await?;

    let repo = ProfileRepository::new(db);
    let updated = repo
        .update(
            profile.id,
            UpdateProfileParams {
                address: "300 New Street, Floor 2".to_string(),
                phone: "(51) 3456-7890".to_string(),
                city: Some("Canoas".to_string()),
                state: Some("RS".to_string()),
                zip_code: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, profile.id);
    assert_eq!(updated.customer_id, customer.id);
    assert_eq!(updated.address, "300 New Street, Floor 2");
    assert_eq!(updated.phone, "(51) 3456-7890");
    assert_eq!(updated.city.as_deref(), Some("Canoas"));
    assert!(updated.zip_code.is_none());

    Ok(())
}

/// Tests updating a profile that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);
    let result = repo
        .update(
            999999,
            UpdateProfileParams {
                address: "400 Nowhere Road, Unit 9".to_string(),
                phone: "(11) 91234-5678".to_string(),
                city: None,
                state: None,
                zip_code: None,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
