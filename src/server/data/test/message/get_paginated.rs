use super::*;

/// Tests paginating messages.
///
/// Expected: Ok with correct page sizes and total
#[tokio::test]
async fn returns_requested_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_message_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    for _ in 0..3 {
        factory::create_message(db, mosque.id).await?;
    }

    let repo = MessageRepository::new(db);
    let (page_one, total) = repo.get_paginated(mosque.id, 0, 2).await?;
    let (page_two, _) = repo.get_paginated(mosque.id, 1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(page_one.len(), 2);
    assert_eq!(page_two.len(), 1);

    Ok(())
}
