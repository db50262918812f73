//! Prayer timetable data repository.

use chrono::NaiveDate;
use migration::OnConflict;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::prayer_time::{PrayerDay, UpsertPrayerDayParam};

/// Repository providing database operations for the prayer timetable.
pub struct PrayerTimeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrayerTimeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces one day of the timetable.
    ///
    /// Keys on the (mosque_id, date) unique index so re-uploading a
    /// timetable overwrites the existing day instead of erroring.
    ///
    /// # Arguments
    /// - `param` - Date and the day's prayer times
    ///
    /// # Returns
    /// - `Ok(PrayerDay)` - The stored day
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert_day(&self, param: UpsertPrayerDayParam) -> Result<PrayerDay, DbErr> {
        let entity = entity::prelude::PrayerTime::insert(entity::prayer_time::ActiveModel {
            mosque_id: sea_orm::ActiveValue::Set(param.mosque_id),
            date: sea_orm::ActiveValue::Set(param.date),
            fajr: sea_orm::ActiveValue::Set(param.fajr),
            dhuhr: sea_orm::ActiveValue::Set(param.dhuhr),
            asr: sea_orm::ActiveValue::Set(param.asr),
            maghrib: sea_orm::ActiveValue::Set(param.maghrib),
            isha: sea_orm::ActiveValue::Set(param.isha),
            jumuah: sea_orm::ActiveValue::Set(param.jumuah),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::prayer_time::Column::MosqueId,
                entity::prayer_time::Column::Date,
            ])
            .update_columns([
                entity::prayer_time::Column::Fajr,
                entity::prayer_time::Column::Dhuhr,
                entity::prayer_time::Column::Asr,
                entity::prayer_time::Column::Maghrib,
                entity::prayer_time::Column::Isha,
                entity::prayer_time::Column::Jumuah,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(PrayerDay::from_entity(entity))
    }

    /// Finds the timetable for a specific date.
    pub async fn find_by_date(
        &self,
        mosque_id: i32,
        date: NaiveDate,
    ) -> Result<Option<PrayerDay>, DbErr> {
        let entity = entity::prelude::PrayerTime::find()
            .filter(entity::prayer_time::Column::MosqueId.eq(mosque_id))
            .filter(entity::prayer_time::Column::Date.eq(date))
            .one(self.db)
            .await?;

        Ok(entity.map(PrayerDay::from_entity))
    }

    /// Retrieves a date range of the timetable in ascending date order.
    ///
    /// # Arguments
    /// - `mosque_id` - Owning mosque
    /// - `from` - Inclusive start date
    /// - `to` - Inclusive end date
    pub async fn get_range(
        &self,
        mosque_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PrayerDay>, DbErr> {
        let entities = entity::prelude::PrayerTime::find()
            .filter(entity::prayer_time::Column::MosqueId.eq(mosque_id))
            .filter(entity::prayer_time::Column::Date.gte(from))
            .filter(entity::prayer_time::Column::Date.lte(to))
            .order_by_asc(entity::prayer_time::Column::Date)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(PrayerDay::from_entity).collect())
    }
}
