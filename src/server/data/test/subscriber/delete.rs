use super::*;

/// Tests deleting a subscriber.
///
/// Expected: Ok(true) and the row is gone
#[tokio::test]
async fn deletes_existing_subscriber() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let existing = factory::create_subscriber(db, mosque.id).await?;

    let repo = SubscriberRepository::new(db);
    assert!(repo.delete(mosque.id, existing.id).await?);
    assert!(repo.find_by_id(mosque.id, existing.id).await?.is_none());

    Ok(())
}

/// Tests that deleting is scoped to the mosque.
///
/// Expected: Ok(false) when the subscriber belongs to another mosque
#[tokio::test]
async fn does_not_delete_across_mosques() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let other = factory::create_mosque(db).await?;
    let existing = factory::create_subscriber(db, other.id).await?;

    let repo = SubscriberRepository::new(db);
    assert!(!repo.delete(mosque.id, existing.id).await?);
    assert!(repo.find_by_id(other.id, existing.id).await?.is_some());

    Ok(())
}
