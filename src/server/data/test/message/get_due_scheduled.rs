use super::*;

/// Tests that the dispatch query returns only due scheduled messages.
///
/// A message scheduled in the past is due; one scheduled in the future is
/// not, and drafts are never picked up.
///
/// Expected: Ok with exactly the past-due scheduled message
#[tokio::test]
async fn returns_only_due_scheduled_messages() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let due = factory::message::MessageFactory::new(db, mosque.id)
        .scheduled_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    factory::message::MessageFactory::new(db, mosque.id)
        .scheduled_at(Utc::now() + Duration::hours(1))
        .build()
        .await?;
    factory::create_message(db, mosque.id).await?;

    let repo = MessageRepository::new(db);
    let messages = repo.get_due_scheduled(Utc::now()).await?;

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, due.id);

    Ok(())
}

/// Tests that a sent message is not picked up again.
///
/// Expected: Ok with an empty result after marking the message sent
#[tokio::test]
async fn sent_messages_are_not_returned() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let due = factory::message::MessageFactory::new(db, mosque.id)
        .scheduled_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;

    let repo = MessageRepository::new(db);
    repo.mark_sent(due.id, 12).await?;

    let messages = repo.get_due_scheduled(Utc::now()).await?;
    assert!(messages.is_empty());

    Ok(())
}
