use crate::server::{data::prayer_time::PrayerTimeRepository, model::prayer_time::UpsertPrayerDayParam};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_date;
mod get_range;
mod upsert_day;

fn day_param(mosque_id: i32, date: NaiveDate) -> UpsertPrayerDayParam {
    UpsertPrayerDayParam {
        mosque_id,
        date,
        fajr: "05:15".to_string(),
        dhuhr: "12:10".to_string(),
        asr: "15:40".to_string(),
        maghrib: "18:00".to_string(),
        isha: "19:15".to_string(),
        jumuah: None,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
