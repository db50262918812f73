use super::*;

/// Tests resolving the deployment's mosque.
///
/// With two rows present the lowest id wins, matching the single-tenant
/// resolution used by the public endpoints.
///
/// Expected: Ok(Some) with the first-created mosque
#[tokio::test]
async fn returns_lowest_id_mosque() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_mosque(db).await?;
    factory::create_mosque(db).await?;

    let repo = MosqueRepository::new(db);
    let mosque = repo.find_default().await?.unwrap();

    assert_eq!(mosque.id, first.id);

    Ok(())
}

/// Tests resolving the mosque before seeding.
///
/// Expected: Ok(None) and exists() is false
#[tokio::test]
async fn returns_none_when_unseeded() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MosqueRepository::new(db);
    assert!(repo.find_default().await?.is_none());
    assert!(!repo.exists().await?);

    Ok(())
}
