use super::*;

/// Tests replacing the mosque configuration from the settings page.
///
/// Expected: Ok(Some) with every field replaced
#[tokio::test]
async fn replaces_configuration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::create_mosque(db).await?;

    let repo = MosqueRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            UpdateMosqueParam {
                name: "Masjid an-Nur".to_string(),
                timezone: "Africa/Johannesburg".to_string(),
                calculation_method: "karachi".to_string(),
                madhab: "hanafi".to_string(),
                ramadan_mode: true,
                reminder_offset_minutes: 20,
                whatsapp_number: Some("+27821230000".to_string()),
            },
        )
        .await?;

    let updated = updated.unwrap();
    assert_eq!(updated.name, "Masjid an-Nur");
    assert_eq!(updated.madhab, "hanafi");
    assert!(updated.ramadan_mode);
    assert_eq!(updated.reminder_offset_minutes, 20);

    Ok(())
}

/// Tests updating a mosque id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_mosque() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Mosque)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MosqueRepository::new(db);
    let updated = repo
        .update(
            9999,
            UpdateMosqueParam {
                name: "Missing".to_string(),
                timezone: "Africa/Johannesburg".to_string(),
                calculation_method: "muslim_world_league".to_string(),
                madhab: "shafi".to_string(),
                ramadan_mode: false,
                reminder_offset_minutes: 15,
                whatsapp_number: None,
            },
        )
        .await?;

    assert!(updated.is_none());

    Ok(())
}
