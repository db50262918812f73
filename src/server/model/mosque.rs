//! Mosque domain model and settings parameters.

use crate::model::mosque::{MosqueDto, MosqueSettingsDto};

/// Mosque tenant with its notification configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Mosque {
    pub id: i32,
    pub name: String,
    pub timezone: String,
    pub calculation_method: String,
    pub madhab: String,
    pub ramadan_mode: bool,
    pub reminder_offset_minutes: i32,
    pub whatsapp_number: Option<String>,
}

impl Mosque {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::mosque::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            timezone: entity.timezone,
            calculation_method: entity.calculation_method,
            madhab: entity.madhab,
            ramadan_mode: entity.ramadan_mode,
            reminder_offset_minutes: entity.reminder_offset_minutes,
            whatsapp_number: entity.whatsapp_number,
        }
    }

    /// Converts to the public landing-page DTO (configuration withheld).
    pub fn into_dto(self) -> MosqueDto {
        MosqueDto {
            id: self.id,
            name: self.name,
            timezone: self.timezone,
            ramadan_mode: self.ramadan_mode,
        }
    }

    /// Converts to the full settings DTO shown to admins.
    pub fn into_settings_dto(self) -> MosqueSettingsDto {
        MosqueSettingsDto {
            name: self.name,
            timezone: self.timezone,
            calculation_method: self.calculation_method,
            madhab: self.madhab,
            ramadan_mode: self.ramadan_mode,
            reminder_offset_minutes: self.reminder_offset_minutes,
            whatsapp_number: self.whatsapp_number,
        }
    }
}

/// Parameters for updating mosque configuration from the settings page.
#[derive(Debug, Clone)]
pub struct UpdateMosqueParam {
    pub name: String,
    pub timezone: String,
    pub calculation_method: String,
    pub madhab: String,
    pub ramadan_mode: bool,
    pub reminder_offset_minutes: i32,
    pub whatsapp_number: Option<String>,
}
