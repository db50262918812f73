use super::*;

/// Tests looking up the timetable for a published date.
///
/// Expected: Ok(Some) with that day's times
#[tokio::test]
async fn finds_published_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_prayer_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    factory::create_prayer_day(db, mosque.id, date(2026, 9, 1)).await?;

    let repo = PrayerTimeRepository::new(db);
    let day = repo.find_by_date(mosque.id, date(2026, 9, 1)).await?;

    assert!(day.is_some());

    Ok(())
}

/// Tests looking up a date without a published timetable.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unpublished_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_prayer_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    let repo = PrayerTimeRepository::new(db);
    let day = repo.find_by_date(mosque.id, date(2026, 9, 1)).await?;

    assert!(day.is_none());

    Ok(())
}
