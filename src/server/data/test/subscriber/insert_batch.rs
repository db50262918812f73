use super::*;

/// Tests inserting a batch of new import records.
///
/// Verifies that every record in the batch is inserted and the returned row
/// count matches the batch size.
///
/// Expected: Ok(3) with all three subscribers persisted
#[tokio::test]
async fn inserts_all_new_records() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let params = vec![
        upsert_param(mosque.id, "+27821000001"),
        upsert_param(mosque.id, "+27821000002"),
        upsert_param(mosque.id, "+27821000003"),
    ];

    let inserted = repo.insert_batch(&params).await?;
    assert_eq!(inserted, 3);

    let (_, total) = repo.get_paginated(mosque.id, 0, 10).await?;
    assert_eq!(total, 3);

    Ok(())
}

/// Tests that duplicate phones within a batch are deduplicated.
///
/// Verifies that numbers already subscribed are skipped via the conflict
/// clause and do not fail the rest of the batch.
///
/// Expected: Ok with only the new number inserted
#[tokio::test]
async fn skips_existing_subscribers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .phone("+27821000001")
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let params = vec![
        upsert_param(mosque.id, "+27821000001"),
        upsert_param(mosque.id, "+27821000002"),
    ];

    let inserted = repo.insert_batch(&params).await?;
    assert_eq!(inserted, 1);

    let (_, total) = repo.get_paginated(mosque.id, 0, 10).await?;
    assert_eq!(total, 2);

    Ok(())
}

/// Tests a batch where every record already exists.
///
/// Verifies the all-duplicates case is reported as zero insertions rather
/// than an error.
///
/// Expected: Ok(0)
#[tokio::test]
async fn returns_zero_when_all_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .phone("+27821000001")
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let inserted = repo
        .insert_batch(&[upsert_param(mosque.id, "+27821000001")])
        .await?;

    assert_eq!(inserted, 0);

    Ok(())
}

/// Tests that an empty batch is a no-op.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn empty_batch_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SubscriberRepository::new(db);
    let inserted = repo.insert_batch(&[]).await?;

    assert_eq!(inserted, 0);

    Ok(())
}
