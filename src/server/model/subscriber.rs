//! Subscriber domain models and operation parameters.
//!
//! Phone numbers inside these types are always in canonical `+27…` form;
//! normalization happens before a parameter is constructed.

use crate::model::subscriber::{PaginatedSubscribersDto, SubscriberDto};

/// Subscriber lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriberStatus {
    Active,
    Paused,
    Unsubscribed,
}

impl SubscriberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Unsubscribed => "unsubscribed",
        }
    }

    /// Parses the stored column value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "paused" => Some(Self::Paused),
            "unsubscribed" => Some(Self::Unsubscribed),
            _ => None,
        }
    }
}

/// Subscriber with status, preferences, and push registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscriber {
    pub id: i32,
    pub mosque_id: i32,
    pub phone: String,
    pub status: String,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
    pub reminder_offset_minutes: Option<i32>,
    pub push_endpoint: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Subscriber {
    pub fn from_entity(entity: entity::subscriber::Model) -> Self {
        Self {
            id: entity.id,
            mosque_id: entity.mosque_id,
            phone: entity.phone,
            status: entity.status,
            notify_announcements: entity.notify_announcements,
            notify_prayer_reminders: entity.notify_prayer_reminders,
            notify_audio: entity.notify_audio,
            reminder_offset_minutes: entity.reminder_offset_minutes,
            push_endpoint: entity.push_endpoint,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SubscriberDto {
        SubscriberDto {
            id: self.id,
            phone: self.phone,
            status: self.status,
            notify_announcements: self.notify_announcements,
            notify_prayer_reminders: self.notify_prayer_reminders,
            notify_audio: self.notify_audio,
            reminder_offset_minutes: self.reminder_offset_minutes,
            has_push_subscription: self.push_endpoint.is_some(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Parameters for subscribing a phone number (public form or admin create).
///
/// Used with upsert semantics: re-subscribing an existing number reactivates
/// it and refreshes the category preferences.
#[derive(Debug, Clone)]
pub struct UpsertSubscriberParam {
    pub mosque_id: i32,
    /// Canonical `+27…` phone number.
    pub phone: String,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
}

/// Parameters for an admin edit of status and preferences.
#[derive(Debug, Clone)]
pub struct UpdateSubscriberParam {
    pub status: SubscriberStatus,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
    pub reminder_offset_minutes: Option<i32>,
}

/// Parameters for attaching Web Push keys to a subscriber.
#[derive(Debug, Clone)]
pub struct SetPushSubscriptionParam {
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}

/// Paginated collection of subscribers with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedSubscribers {
    pub subscribers: Vec<Subscriber>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedSubscribers {
    pub fn into_dto(self) -> PaginatedSubscribersDto {
        PaginatedSubscribersDto {
            subscribers: self.subscribers.into_iter().map(|s| s.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Outcome counts of a bulk import run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
    pub errors: usize,
}
