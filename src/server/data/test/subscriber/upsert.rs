use super::*;

/// Tests subscribing a new phone number.
///
/// Verifies that the subscriber repository inserts a new row with active
/// status and the requested category preferences.
///
/// Expected: Ok with an active subscriber
#[tokio::test]
async fn creates_new_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let subscriber = repo.upsert(upsert_param(mosque.id, "+27821234567")).await?;

    assert_eq!(subscriber.phone, "+27821234567");
    assert_eq!(subscriber.status, "active");
    assert!(subscriber.notify_announcements);
    assert!(!subscriber.notify_audio);

    Ok(())
}

/// Tests subscribing a phone number that already exists.
///
/// Verifies that the conflict on (mosque_id, phone) updates the existing row
/// instead of inserting a duplicate, refreshing the category preferences.
///
/// Expected: Ok with a single row carrying the new preferences
#[tokio::test]
async fn updates_preferences_on_conflict() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let first = repo.upsert(upsert_param(mosque.id, "+27821234567")).await?;

    let mut param = upsert_param(mosque.id, "+27821234567");
    param.notify_audio = true;
    let second = repo.upsert(param).await?;

    assert_eq!(first.id, second.id);
    assert!(second.notify_audio);

    let (_, total) = repo.get_paginated(mosque.id, 0, 10).await?;
    assert_eq!(total, 1);

    Ok(())
}

/// Tests re-subscribing a number that previously unsubscribed.
///
/// Verifies that an unsubscribed row becomes active again when the same
/// phone signs up through the public form.
///
/// Expected: Ok with status back to active
#[tokio::test]
async fn reactivates_unsubscribed_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let existing = factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .phone("+27821234567")
        .status("unsubscribed")
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let subscriber = repo.upsert(upsert_param(mosque.id, "+27821234567")).await?;

    assert_eq!(subscriber.id, existing.id);
    assert_eq!(subscriber.status, "active");

    Ok(())
}
