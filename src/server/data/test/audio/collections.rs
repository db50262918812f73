use super::*;

/// Tests creating a collection.
///
/// Expected: Ok with an empty collection
#[tokio::test]
async fn creates_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = AudioRepository::new(db);
    let collection = repo
        .create_collection(CreateCollectionParam {
            mosque_id: mosque.id,
            title: "Friday Khutbahs".to_string(),
            description: Some("Weekly sermons".to_string()),
        })
        .await?;

    assert_eq!(collection.title, "Friday Khutbahs");
    assert_eq!(collection.file_count, 0);

    Ok(())
}

/// Tests listing collections with their file counts.
///
/// Expected: Ok with the per-collection counts
#[tokio::test]
async fn lists_collections_with_file_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let with_files = factory::create_collection(db, mosque.id).await?;
    factory::create_audio_file(db, with_files.id).await?;
    factory::create_audio_file(db, with_files.id).await?;
    let empty = factory::create_collection(db, mosque.id).await?;

    let repo = AudioRepository::new(db);
    let collections = repo.get_collections(mosque.id).await?;

    assert_eq!(collections.len(), 2);
    let counted = collections.iter().find(|c| c.id == with_files.id).unwrap();
    assert_eq!(counted.file_count, 2);
    let counted = collections.iter().find(|c| c.id == empty.id).unwrap();
    assert_eq!(counted.file_count, 0);

    Ok(())
}

/// Tests deleting a collection.
///
/// Expected: Ok(true) and the collection is gone
#[tokio::test]
async fn deletes_collection() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let collection = factory::create_collection(db, mosque.id).await?;

    let repo = AudioRepository::new(db);
    assert!(repo.delete_collection(mosque.id, collection.id).await?);
    assert!(repo.find_collection(mosque.id, collection.id).await?.is_none());

    Ok(())
}

/// Tests deleting a collection owned by another mosque.
///
/// Expected: Ok(false)
#[tokio::test]
async fn does_not_delete_across_mosques() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let other = factory::create_mosque(db).await?;
    let collection = factory::create_collection(db, other.id).await?;

    let repo = AudioRepository::new(db);
    assert!(!repo.delete_collection(mosque.id, collection.id).await?);

    Ok(())
}
