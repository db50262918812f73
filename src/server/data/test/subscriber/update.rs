use super::*;

/// Tests updating a subscriber's status and preferences.
///
/// Expected: Ok(Some) with the new status and preferences persisted
#[tokio::test]
async fn updates_status_and_preferences() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_subscriber(db, mosque.id).await?;

    let repo = SubscriberRepository::new(db);
    let updated = repo
        .update(
            mosque.id,
            existing.id,
            UpdateSubscriberParam {
                status: SubscriberStatus::Paused,
                notify_announcements: false,
                notify_prayer_reminders: true,
                notify_audio: true,
                reminder_offset_minutes: Some(10),
            },
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.status, "paused");
    assert!(!updated.notify_announcements);
    assert!(updated.notify_prayer_reminders);
    assert_eq!(updated.reminder_offset_minutes, Some(10));

    Ok(())
}

/// Tests updating a subscriber that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let updated = repo
        .update(
            mosque.id,
            9999,
            UpdateSubscriberParam {
                status: SubscriberStatus::Active,
                notify_announcements: true,
                notify_prayer_reminders: false,
                notify_audio: false,
                reminder_offset_minutes: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
