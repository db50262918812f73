use super::*;

/// Tests recipient resolution for the announcement category.
///
/// Verifies that paused and unsubscribed rows are excluded, as are active
/// subscribers who opted out of announcements.
///
/// Expected: Ok with only the opted-in active subscriber
#[tokio::test]
async fn filters_status_and_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let wanted = factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .notify_announcements(true)
        .build()
        .await?;
    factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .status("paused")
        .build()
        .await?;
    factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .notify_announcements(false)
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let recipients = repo.get_active_by_category(mosque.id, "announcement").await?;

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].id, wanted.id);

    Ok(())
}

/// Tests recipient resolution for the audio category.
///
/// Expected: Ok with only subscribers opted into audio updates
#[tokio::test]
async fn audio_category_uses_audio_preference() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let wanted = factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .notify_audio(true)
        .build()
        .await?;
    factory::create_subscriber(db, mosque.id).await?;

    let repo = SubscriberRepository::new(db);
    let recipients = repo.get_active_by_category(mosque.id, "audio").await?;

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].id, wanted.id);

    Ok(())
}
