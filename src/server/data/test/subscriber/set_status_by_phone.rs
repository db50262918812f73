use super::*;

/// Tests the webhook "stop" path setting a subscriber to unsubscribed.
///
/// Expected: Ok(true) with the status persisted
#[tokio::test]
async fn sets_status_for_known_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .phone("+27821234567")
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let changed = repo
        .set_status_by_phone(mosque.id, "+27821234567", SubscriberStatus::Unsubscribed)
        .await?;

    assert!(changed);
    let subscriber = repo.find_by_id(mosque.id, existing.id).await?.unwrap();
    assert_eq!(subscriber.status, "unsubscribed");

    Ok(())
}

/// Tests a webhook command from a number that never subscribed.
///
/// Expected: Ok(false) with nothing updated
#[tokio::test]
async fn returns_false_for_unknown_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let changed = repo
        .set_status_by_phone(mosque.id, "+27829999999", SubscriberStatus::Paused)
        .await?;

    assert!(!changed);

    Ok(())
}
