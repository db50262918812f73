use super::*;

/// Tests attaching Web Push keys to a subscriber by phone.
///
/// Expected: Ok(true) with the endpoint stored
#[tokio::test]
async fn stores_push_keys() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::subscriber::SubscriberFactory::new(db, mosque.id)
        .phone("+27821234567")
        .build()
        .await?;

    let repo = SubscriberRepository::new(db);
    let stored = repo
        .set_push_subscription(
            mosque.id,
            "+27821234567",
            SetPushSubscriptionParam {
                endpoint: "https://push.example.com/send/abc".to_string(),
                p256dh: "p256dh-key".to_string(),
                auth: "auth-secret".to_string(),
            },
        )
        .await?;

    assert!(stored);
    let subscriber = repo.find_by_id(mosque.id, existing.id).await?.unwrap();
    assert_eq!(
        subscriber.push_endpoint.as_deref(),
        Some("https://push.example.com/send/abc")
    );

    Ok(())
}

/// Tests push registration for an unknown phone.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_unknown_phone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = SubscriberRepository::new(db);
    let stored = repo
        .set_push_subscription(
            mosque.id,
            "+27829999999",
            SetPushSubscriptionParam {
                endpoint: "https://push.example.com/send/abc".to_string(),
                p256dh: "p256dh-key".to_string(),
                auth: "auth-secret".to_string(),
            },
        )
        .await?;

    assert!(!stored);

    Ok(())
}
