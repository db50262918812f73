//! Prayer timetable DTOs and next-prayer countdown arithmetic.
//!
//! The countdown logic is pure so the landing page can tick it client-side
//! every second without a round trip: given today's timetable and the current
//! local time, pick the next upcoming prayer and the seconds until it.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// The five daily prayers rendered on the landing page.
pub const PRAYER_NAMES: [&str; 5] = ["Fajr", "Dhuhr", "Asr", "Maghrib", "Isha"];

/// One day of prayer times as shown publicly and edited by admins.
///
/// Times are "HH:MM" strings in the mosque's local timezone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrayerTimesDto {
    /// ISO date, e.g. "2026-08-29".
    pub date: String,
    pub fajr: String,
    pub dhuhr: String,
    pub asr: String,
    pub maghrib: String,
    pub isha: String,
    pub jumuah: Option<String>,
}

impl PrayerTimesDto {
    /// Returns (name, time) pairs for the five daily prayers in order.
    pub fn daily(&self) -> [(&'static str, &str); 5] {
        [
            ("Fajr", &self.fajr),
            ("Dhuhr", &self.dhuhr),
            ("Asr", &self.asr),
            ("Maghrib", &self.maghrib),
            ("Isha", &self.isha),
        ]
    }
}

/// The next upcoming prayer and the countdown to it.
#[derive(Clone, Debug, PartialEq)]
pub struct NextPrayer {
    pub name: &'static str,
    /// "HH:MM" time of the prayer.
    pub time: String,
    pub seconds_until: i64,
    /// True when the selected prayer is tomorrow's Fajr.
    pub tomorrow: bool,
}

fn parse_hhmm(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").ok()
}

/// Selects the next upcoming prayer for the given local time.
///
/// Walks the five daily prayers in order and returns the first one strictly
/// after `now`. After Isha the countdown wraps to tomorrow's Fajr, reusing
/// today's Fajr time as the best available estimate.
///
/// # Arguments
/// - `times` - Today's timetable
/// - `now` - Current local wall-clock time
///
/// # Returns
/// - `Some(NextPrayer)` - Next prayer with countdown seconds
/// - `None` - The timetable contains an unparseable time
pub fn next_prayer(times: &PrayerTimesDto, now: NaiveTime) -> Option<NextPrayer> {
    for (name, time_str) in times.daily() {
        let time = parse_hhmm(time_str)?;
        if time > now {
            return Some(NextPrayer {
                name,
                time: time_str.to_string(),
                seconds_until: (time - now).num_seconds(),
                tomorrow: false,
            });
        }
    }

    // Past Isha: wrap around to Fajr.
    let fajr = parse_hhmm(&times.fajr)?;
    let until_midnight = NaiveTime::from_hms_opt(23, 59, 59)? - now;
    let seconds_until =
        until_midnight.num_seconds() + 1 + (fajr - NaiveTime::from_hms_opt(0, 0, 0)?).num_seconds();

    Some(NextPrayer {
        name: "Fajr",
        time: times.fajr.clone(),
        seconds_until,
        tomorrow: true,
    })
}

/// Formats a countdown as "H:MM:SS" for the landing page.
pub fn format_countdown(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod test {
    use super::*;

    fn timetable() -> PrayerTimesDto {
        PrayerTimesDto {
            date: "2026-08-29".to_string(),
            fajr: "05:30".to_string(),
            dhuhr: "12:15".to_string(),
            asr: "15:45".to_string(),
            maghrib: "18:05".to_string(),
            isha: "19:20".to_string(),
            jumuah: Some("13:00".to_string()),
        }
    }

    #[test]
    fn selects_first_prayer_before_fajr() {
        let next = next_prayer(&timetable(), NaiveTime::from_hms_opt(4, 0, 0).unwrap()).unwrap();
        assert_eq!(next.name, "Fajr");
        assert!(!next.tomorrow);
        assert_eq!(next.seconds_until, 90 * 60);
    }

    #[test]
    fn selects_mid_day_prayer() {
        let next = next_prayer(&timetable(), NaiveTime::from_hms_opt(13, 0, 0).unwrap()).unwrap();
        assert_eq!(next.name, "Asr");
        assert_eq!(next.time, "15:45");
    }

    #[test]
    fn exact_prayer_time_moves_to_following_prayer() {
        // At exactly Dhuhr the countdown targets Asr, not a zero-second Dhuhr.
        let next = next_prayer(&timetable(), NaiveTime::from_hms_opt(12, 15, 0).unwrap()).unwrap();
        assert_eq!(next.name, "Asr");
    }

    #[test]
    fn wraps_to_tomorrow_fajr_after_isha() {
        let next = next_prayer(&timetable(), NaiveTime::from_hms_opt(22, 0, 0).unwrap()).unwrap();
        assert_eq!(next.name, "Fajr");
        assert!(next.tomorrow);
        // 2h to midnight plus 5h30m to Fajr.
        assert_eq!(next.seconds_until, (2 * 3600) + (5 * 3600) + (30 * 60));
    }

    #[test]
    fn unparseable_time_returns_none() {
        let mut times = timetable();
        times.asr = "soon".to_string();
        assert!(next_prayer(&times, NaiveTime::from_hms_opt(13, 0, 0).unwrap()).is_none());
    }

    #[test]
    fn formats_countdown() {
        assert_eq!(format_countdown(3661), "1:01:01");
        assert_eq!(format_countdown(59), "0:00:59");
        assert_eq!(format_countdown(-5), "0:00:00");
    }
}
