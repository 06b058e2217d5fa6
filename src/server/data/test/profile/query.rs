use super::*;

/// Tests the lookup of a profile by its owning customer.
#[tokio::test]
async fn finds_profile_by_customer_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let customer = CustomerFactory::new(db).build().await?;
    let other = CustomerFactory::new(db).build().await?;
    let profile = ProfileFactory::new(db, customer.id).build().await?;

    let repo = ProfileRepository::new(db);
    assert_eq!(repo.find_by_customer_id(customer.id).await?, Some(profile));
    assert!(repo.find_by_customer_id(other.id).await?.is_none());

    Ok(())
}

/// Tests that the city filter matches case-insensitively.
#[tokio::test]
async fn finds_profiles_by_city_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CustomerFactory::new(db).build().await?;
    let second = CustomerFactory::new(db).build().await?;
    let matching = ProfileFactory::new(db, first.id)
        .city("Porto Alegre")
        .build()
        .await?;
    ProfileFactory::new(db, second.id)
        .city("Curitiba")
        .build()
        .await?;

    let repo = ProfileRepository::new(db);
    let profiles = repo.find_by_city("PORTO ALEGRE").await?;

    assert_eq!(profiles, vec![matching]);

    Ok(())
}

/// Tests that the state filter matches case-insensitively.
#[tokio::test]
async fn finds_profiles_by_state_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_profile_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = CustomerFactory::new(db).build().await?;
    let second = CustomerFactory::new(db).build().await?;
    let matching = ProfileFactory::new(db, first.id)
        .state("RS")
        .build()
        .await?;
    ProfileFactory::new(db, second.id).state("PR").build().await?;

    let repo = ProfileRepository::new(db);
    let profiles = repo.find_by_state("rs").await?;

    assert_eq!(profiles, vec![matching]);

    Ok(())
}
