use super::*;

/// Tests registering uploaded file metadata.
///
/// Expected: Ok with the metadata persisted
#[tokio::test]
async fn registers_file_metadata() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let collection = factory::create_collection(db, mosque.id).await?;

    let repo = AudioRepository::new(db);
    let file = repo
        .create_file(CreateAudioFileParam {
            collection_id: collection.id,
            title: "Surah al-Kahf".to_string(),
            storage_url: "https://storage.example.com/audio/kahf.mp3".to_string(),
            duration_seconds: Some(2400),
            size_bytes: Some(19_200_000),
        })
        .await?;

    assert_eq!(file.collection_id, collection.id);
    assert_eq!(file.title, "Surah al-Kahf");

    let files = repo.get_files(collection.id).await?;
    assert_eq!(files.len(), 1);

    Ok(())
}

/// Tests deleting a file record.
///
/// Expected: Ok(true), then Ok(false) for a second delete
#[tokio::test]
async fn deletes_file_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_audio_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;
    let collection = factory::create_collection(db, mosque.id).await?;
    let file = factory::create_audio_file(db, collection.id).await?;

    let repo = AudioRepository::new(db);
    assert!(repo.delete_file(collection.id, file.id).await?);
    assert!(!repo.delete_file(collection.id, file.id).await?);

    Ok(())
}
