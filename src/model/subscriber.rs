use serde::{Deserialize, Serialize};

/// Subscriber row as shown in the admin dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscriberDto {
    pub id: i32,
    pub phone: String,
    pub status: String,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
    pub reminder_offset_minutes: Option<i32>,
    pub has_push_subscription: bool,
    /// ISO-8601 creation timestamp.
    pub created_at: String,
}

/// Page of subscribers with pagination metadata for the dashboard table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedSubscribersDto {
    pub subscribers: Vec<SubscriberDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body of the public subscribe form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequestDto {
    pub phone: String,
    #[serde(default = "default_true")]
    pub notify_announcements: bool,
    #[serde(default)]
    pub notify_prayer_reminders: bool,
    #[serde(default)]
    pub notify_audio: bool,
}

fn default_true() -> bool {
    true
}

/// One candidate record in a bulk import request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportSubscriberDto {
    pub phone: String,
    #[serde(default = "default_true")]
    pub notify_announcements: bool,
    #[serde(default)]
    pub notify_prayer_reminders: bool,
    #[serde(default)]
    pub notify_audio: bool,
}

/// Bulk import request body: `{subscribers: [...]}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportRequestDto {
    pub subscribers: Vec<ImportSubscriberDto>,
}

/// Bulk import outcome: `{imported, skipped, errors}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImportResultDto {
    /// Records inserted (or deduplicated against existing rows).
    pub imported: usize,
    /// Records discarded because the phone number failed validation.
    pub skipped: usize,
    /// Records lost to failed insert batches.
    pub errors: usize,
}

/// Admin edit of a subscriber's status and notification preferences.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateSubscriberDto {
    pub status: String,
    pub notify_announcements: bool,
    pub notify_prayer_reminders: bool,
    pub notify_audio: bool,
    pub reminder_offset_minutes: Option<i32>,
}

/// Web Push subscription keys posted by the browser after registration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PushSubscriptionDto {
    pub phone: String,
    pub endpoint: String,
    pub p256dh: String,
    pub auth: String,
}
