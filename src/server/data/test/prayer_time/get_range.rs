use super::*;

/// Tests retrieving an inclusive date range in ascending order.
///
/// Expected: Ok with the in-range days sorted by date
#[tokio::test]
async fn returns_inclusive_sorted_range() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_prayer_time_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let mosque = factory::create_mosque(db).await?;

    factory::create_prayer_day(db, mosque.id, date(2026, 9, 3)).await?;
    factory::create_prayer_day(db, mosque.id, date(2026, 9, 1)).await?;
    factory::create_prayer_day(db, mosque.id, date(2026, 9, 5)).await?;

    let repo = PrayerTimeRepository::new(db);
    let range = repo.get_range(mosque.id, date(2026, 9, 1), date(2026, 9, 3)).await?;

    assert_eq!(range.len(), 2);
    assert_eq!(range[0].date, date(2026, 9, 1));
    assert_eq!(range[1].date, date(2026, 9, 3));

    Ok(())
}
