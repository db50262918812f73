//! Prayer timetable factory for creating test timetable days.

use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test prayer timetable days with customizable fields.
pub struct PrayerDayFactory<'a> {
    db: &'a DatabaseConnection,
    mosque_id: i32,
    date: NaiveDate,
    fajr: String,
    dhuhr: String,
    asr: String,
    maghrib: String,
    isha: String,
    jumuah: Option<String>,
}

impl<'a> PrayerDayFactory<'a> {
    /// Creates a new PrayerDayFactory with default values.
    ///
    /// Defaults to a plausible Johannesburg winter timetable with no
    /// jumuah time set.
    pub fn new(db: &'a DatabaseConnection, mosque_id: i32, date: NaiveDate) -> Self {
        Self {
            db,
            mosque_id,
            date,
            fajr: "05:30".to_string(),
            dhuhr: "12:15".to_string(),
            asr: "15:30".to_string(),
            maghrib: "17:45".to_string(),
            isha: "19:00".to_string(),
            jumuah: None,
        }
    }

    pub fn fajr(mut self, fajr: &str) -> Self {
        self.fajr = fajr.to_string();
        self
    }

    pub fn dhuhr(mut self, dhuhr: &str) -> Self {
        self.dhuhr = dhuhr.to_string();
        self
    }

    pub fn asr(mut self, asr: &str) -> Self {
        self.asr = asr.to_string();
        self
    }

    pub fn maghrib(mut self, maghrib: &str) -> Self {
        self.maghrib = maghrib.to_string();
        self
    }

    pub fn isha(mut self, isha: &str) -> Self {
        self.isha = isha.to_string();
        self
    }

    pub fn jumuah(mut self, jumuah: &str) -> Self {
        self.jumuah = Some(jumuah.to_string());
        self
    }

    /// Inserts the timetable day into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created prayer time entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::prayer_time::Model, DbErr> {
        entity::prayer_time::ActiveModel {
            mosque_id: ActiveValue::Set(self.mosque_id),
            date: ActiveValue::Set(self.date),
            fajr: ActiveValue::Set(self.fajr),
            dhuhr: ActiveValue::Set(self.dhuhr),
            asr: ActiveValue::Set(self.asr),
            maghrib: ActiveValue::Set(self.maghrib),
            isha: ActiveValue::Set(self.isha),
            jumuah: ActiveValue::Set(self.jumuah),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a timetable day with default times.
pub async fn create_prayer_day(
    db: &DatabaseConnection,
    mosque_id: i32,
    date: NaiveDate,
) -> Result<entity::prayer_time::Model, DbErr> {
    PrayerDayFactory::new(db, mosque_id, date).build().await
}
