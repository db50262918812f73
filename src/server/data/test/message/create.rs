use super::*;

/// Tests creating a message without a schedule.
///
/// Expected: Ok with status "draft" and no scheduled time
#[tokio::test]
async fn creates_draft_without_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            mosque_id: mosque.id,
            title: "Eid prayer times".to_string(),
            body: "Takbeer starts at 06:30.".to_string(),
            category: "announcement".to_string(),
            scheduled_at: None,
        })
        .await?;

    assert_eq!(message.status, "draft");
    assert!(message.scheduled_at.is_none());
    assert_eq!(message.recipient_count, 0);

    Ok(())
}

/// Tests creating a message with a future schedule.
///
/// Expected: Ok with status "scheduled"
#[tokio::test]
async fn creates_scheduled_with_schedule() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let scheduled_at = Utc::now() + Duration::hours(2);

    let repo = MessageRepository::new(db);
    let message = repo
        .create(CreateMessageParam {
            mosque_id: mosque.id,
            title: "Jumuah reminder".to_string(),
            body: "Khutbah begins at 12:45.".to_string(),
            category: "announcement".to_string(),
            scheduled_at: Some(scheduled_at),
        })
        .await?;

    assert_eq!(message.status, "scheduled");
    assert!(message.scheduled_at.is_some());

    Ok(())
}
