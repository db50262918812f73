//! Mosque business logic: the public landing payload, admin settings, and
//! the prayer timetable.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::mosque::MosqueInfoDto,
    server::{
        data::{mosque::MosqueRepository, prayer_time::PrayerTimeRepository},
        error::AppError,
        model::{
            mosque::{Mosque, UpdateMosqueParam},
            prayer_time::{PrayerDay, UpsertPrayerDayParam},
        },
    },
};

/// Service providing business logic for the mosque tenant and its
/// timetable.
pub struct MosqueService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MosqueService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the deployment's mosque for request handling.
    ///
    /// # Returns
    /// - `Ok(Mosque)` - The mosque
    /// - `Err(AppError::NotFound)` - Database has not been seeded yet
    pub async fn require_default(&self) -> Result<Mosque, AppError> {
        let mosque_repo = MosqueRepository::new(self.db);

        mosque_repo
            .find_default()
            .await?
            .ok_or_else(|| AppError::NotFound("Mosque not configured".to_string()))
    }

    /// Builds the public landing-page payload.
    ///
    /// Today's date is taken in the mosque's own timezone so the timetable
    /// rolls over at local midnight rather than UTC midnight. A missing
    /// timetable row is not an error; the page renders without times.
    ///
    /// # Returns
    /// - `Ok(MosqueInfoDto)` - Mosque info plus today's times when uploaded
    /// - `Err(AppError::NotFound)` - Database has not been seeded yet
    pub async fn get_landing_info(&self) -> Result<MosqueInfoDto, AppError> {
        let mosque = self.require_default().await?;
        let today = local_today(&mosque.timezone);

        let prayer_repo = PrayerTimeRepository::new(self.db);
        let prayer_times = prayer_repo
            .find_by_date(mosque.id, today)
            .await?
            .map(|day| day.into_dto());

        Ok(MosqueInfoDto {
            mosque: mosque.into_dto(),
            prayer_times,
        })
    }

    /// Updates mosque configuration from the admin settings page.
    ///
    /// # Returns
    /// - `Ok(Mosque)` - Updated mosque
    /// - `Err(AppError::BadRequest)` - Empty name or unknown timezone
    /// - `Err(AppError::NotFound)` - No mosque with that id
    pub async fn update_settings(
        &self,
        mosque_id: i32,
        param: UpdateMosqueParam,
    ) -> Result<Mosque, AppError> {
        if param.name.trim().is_empty() {
            return Err(AppError::BadRequest("Name is required.".to_string()));
        }

        if param.timezone.parse::<Tz>().is_err() {
            return Err(AppError::BadRequest(format!(
                "Unknown timezone: {}",
                param.timezone
            )));
        }

        let mosque_repo = MosqueRepository::new(self.db);
        let updated = mosque_repo.update(mosque_id, param).await?;

        updated.ok_or_else(|| AppError::NotFound("Mosque not found".to_string()))
    }

    /// Inserts or replaces days of the prayer timetable.
    ///
    /// # Arguments
    /// - `days` - Days to store, each keyed on its date
    ///
    /// # Returns
    /// - `Ok(Vec<PrayerDay>)` - The stored days
    /// - `Err(AppError::BadRequest)` - Empty request or malformed time
    pub async fn upsert_prayer_days(
        &self,
        days: Vec<UpsertPrayerDayParam>,
    ) -> Result<Vec<PrayerDay>, AppError> {
        if days.is_empty() {
            return Err(AppError::BadRequest("No days provided.".to_string()));
        }

        for day in &days {
            for time in [&day.fajr, &day.dhuhr, &day.asr, &day.maghrib, &day.isha]
                .into_iter()
                .chain(day.jumuah.as_ref())
            {
                if !is_valid_time(time) {
                    return Err(AppError::BadRequest(format!(
                        "Invalid time \"{}\" for {}; expected HH:MM.",
                        time, day.date
                    )));
                }
            }
        }

        let prayer_repo = PrayerTimeRepository::new(self.db);
        let mut stored = Vec::with_capacity(days.len());

        for day in days {
            stored.push(prayer_repo.upsert_day(day).await?);
        }

        Ok(stored)
    }

    /// Retrieves a date range of the timetable for the admin editor.
    pub async fn get_prayer_range(
        &self,
        mosque_id: i32,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<PrayerDay>, AppError> {
        if from > to {
            return Err(AppError::BadRequest(
                "Range start must not be after its end.".to_string(),
            ));
        }

        let prayer_repo = PrayerTimeRepository::new(self.db);
        let days = prayer_repo.get_range(mosque_id, from, to).await?;

        Ok(days)
    }
}

/// Today's date in the given IANA timezone, falling back to UTC when the
/// stored timezone fails to parse.
fn local_today(timezone: &str) -> NaiveDate {
    match timezone.parse::<Tz>() {
        Ok(tz) => Utc::now().with_timezone(&tz).date_naive(),
        Err(_) => {
            tracing::warn!("Unparseable mosque timezone {}, using UTC", timezone);
            Utc::now().date_naive()
        }
    }
}

/// Checks a wall-clock time in `HH:MM` form, 00:00 through 23:59.
fn is_valid_time(time: &str) -> bool {
    let Some((hours, minutes)) = time.split_once(':') else {
        return false;
    };

    if hours.len() != 2 || minutes.len() != 2 {
        return false;
    }

    matches!(
        (hours.parse::<u8>(), minutes.parse::<u8>()),
        (Ok(h), Ok(m)) if h < 24 && m < 60
    )
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_well_formed_times() {
        assert!(is_valid_time("00:00"));
        assert!(is_valid_time("05:13"));
        assert!(is_valid_time("23:59"));
    }

    #[test]
    fn rejects_malformed_times() {
        assert!(!is_valid_time("24:00"));
        assert!(!is_valid_time("12:60"));
        assert!(!is_valid_time("9:30"));
        assert!(!is_valid_time("12:5"));
        assert!(!is_valid_time("noon"));
        assert!(!is_valid_time(""));
    }
}
