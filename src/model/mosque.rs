use serde::{Deserialize, Serialize};

use crate::model::prayer::PrayerTimesDto;

/// Public mosque information for the landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MosqueDto {
    pub id: i32,
    pub name: String,
    pub timezone: String,
    pub ramadan_mode: bool,
}

/// Landing page payload: mosque info plus today's timetable when one exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MosqueInfoDto {
    pub mosque: MosqueDto,
    pub prayer_times: Option<PrayerTimesDto>,
}

/// Full mosque configuration shown on the admin settings page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MosqueSettingsDto {
    pub name: String,
    pub timezone: String,
    pub calculation_method: String,
    pub madhab: String,
    pub ramadan_mode: bool,
    pub reminder_offset_minutes: i32,
    pub whatsapp_number: Option<String>,
}
