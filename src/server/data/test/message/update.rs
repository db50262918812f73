use super::*;

/// Tests editing a draft message.
///
/// Expected: Ok(Some) with new content, still a draft
#[tokio::test]
async fn updates_draft_content() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_message(db, mosque.id).await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update(
            mosque.id,
            existing.id,
            UpdateMessageParam {
                title: "Updated title".to_string(),
                body: "Updated body".to_string(),
                category: "announcement".to_string(),
                scheduled_at: None,
            },
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.title, "Updated title");
    assert_eq!(updated.status, "draft");

    Ok(())
}

/// Tests that adding a schedule to a draft re-derives the status.
///
/// Expected: Ok(Some) with status "scheduled"
#[tokio::test]
async fn scheduling_a_draft_sets_scheduled_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_message(db, mosque.id).await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update(
            mosque.id,
            existing.id,
            UpdateMessageParam {
                title: existing.title.clone(),
                body: existing.body.clone(),
                category: existing.category.clone(),
                scheduled_at: Some(Utc::now() + Duration::hours(3)),
            },
        )
        .await?;

    assert_eq!(updated.unwrap().status, "scheduled");

    Ok(())
}

/// Tests updating a message that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_message() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = MessageRepository::new(db);
    let updated = repo
        .update(
            mosque.id,
            9999,
            UpdateMessageParam {
                title: "Missing".to_string(),
                body: "Missing".to_string(),
                category: "announcement".to_string(),
                scheduled_at: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
