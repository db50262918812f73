use super::*;

/// Tests inserting a new timetable day.
///
/// Expected: Ok with the times persisted for the date
#[tokio::test]
async fn creates_new_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_prayer_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = PrayerTimeRepository::new(db);
    let day = repo.upsert_day(day_param(mosque.id, date(2026, 9, 1))).await?;

    assert_eq!(day.date, date(2026, 9, 1));
    assert_eq!(day.fajr, "05:15");
    assert!(day.jumuah.is_none());

    Ok(())
}

/// Tests replacing an existing day's times.
///
/// Verifies the conflict on (mosque_id, date) replaces the row instead of
/// inserting a second one.
///
/// Expected: Ok with the new times and a single row for the date
#[tokio::test]
async fn replaces_existing_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_prayer_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    factory::create_prayer_day(db, mosque.id, date(2026, 9, 1)).await?;

    let mut param = day_param(mosque.id, date(2026, 9, 1));
    param.fajr = "05:00".to_string();
    param.jumuah = Some("12:45".to_string());

    let repo = PrayerTimeRepository::new(db);
    let day = repo.upsert_day(param).await?;

    assert_eq!(day.fajr, "05:00");
    assert_eq!(day.jumuah.as_deref(), Some("12:45"));

    let range = repo.get_range(mosque.id, date(2026, 9, 1), date(2026, 9, 1)).await?;
    assert_eq!(range.len(), 1);

    Ok(())
}
