use super::*;

/// Tests paginating subscribers.
///
/// Verifies page slicing and the total row count with more rows than fit on
/// one page.
///
/// Expected: Ok with 2 rows on the first page and total of 3
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    for _ in 0..3 {
        factory::create_subscriber(db, mosque.id).await?;
    }

    let repo = SubscriberRepository::new(db);
    let (page_one, total) = repo.get_paginated(mosque.id, 0, 2).await?;
    let (page_two, _) = repo.get_paginated(mosque.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_two.len(), 1);

    Ok(())
}

/// Tests that pagination is scoped to the mosque.
///
/// Expected: Ok with only the requested mosque's subscribers
#[tokio::test]
async fn excludes_other_mosques() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_subscriber_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let other = factory::create_mosque(db).await?;

    factory::create_subscriber(db, mosque.id).await?;
    factory::create_subscriber(db, other.id).await?;

    let repo = SubscriberRepository::new(db);
    let (subscribers, total) = repo.get_paginated(mosque.id, 0, 10).await?;

    assert_eq!(total, 1);
    assert!(subscribers.iter().all(|s| s.mosque_id == mosque.id));

    Ok(())
}
