use super::*;

/// Tests marking a message as sent.
///
/// Expected: status "sent" with recipient count and sent timestamp recorded
#[tokio::test]
async fn records_delivery_bookkeeping() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_message(db, mosque.id).await?;

    let repo = MessageRepository::new(db);
    repo.mark_sent(existing.id, 42).await?;

    let message = repo.find_by_id(mosque.id, existing.id).await?.unwrap();
    assert_eq!(message.status, "sent");
    assert_eq!(message.recipient_count, 42);
    assert!(message.sent_at.is_some());

    Ok(())
}

/// Tests marking a message as failed.
///
/// Expected: status "failed" so the dispatch job will not retry it
#[tokio::test]
async fn mark_failed_sets_failed_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_message(db, mosque.id).await?;

    let repo = MessageRepository::new(db);
    repo.mark_failed(existing.id).await?;

    let message = repo.find_by_id(mosque.id, existing.id).await?.unwrap();
    assert_eq!(message.status, "failed");

    Ok(())
}
