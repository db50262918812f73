//! Prayer timetable domain model.

use chrono::NaiveDate;

use crate::model::prayer::PrayerTimesDto;

/// One day of a mosque's prayer timetable.
#[derive(Debug, Clone, PartialEq)]
pub struct PrayerDay {
    pub id: i32,
    pub mosque_id: i32,
    pub date: NaiveDate,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jumuah: Option<String>,
}

impl PrayerDay {
    pub fn from_entity(entity: entity::prayer_time::Model) -> Self {
        Self {
            id: entity.id,
            mosque_id: entity.mosque_id,
            date: entity.date,
            fajr: entity.fajr,
            dhuhr: entity.dhuhr,
            asr: entity.asr,
            maghrib: entity.maghrib,
            isha: entity.isha,
            jumuah: entity.jumuah,
        }
    }

    pub fn into_dto(self) -> PrayerTimesDto {
        PrayerTimesDto {
            date: self.date.to_string(),
            fajr: self.fajr,
            dhuhr: self.dhuhr,
            asr: self.asr,
            maghrib: self.maghrib,
            isha: self.isha,
            jumuah: self.jumuah,
        }
    }
}

/// Parameters for inserting or replacing one day of the timetable.
#[derive(Debug, Clone)]
pub struct UpsertPrayerDayParam {
    pub mosque_id: i32,
    pub date: NaiveDate,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jumuah: Option<String>,
}
