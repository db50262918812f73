//! Subscriber factory for creating test subscribers.

use crate::factory::helpers::next_phone;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test subscribers with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::subscriber::SubscriberFactory;
///
/// let subscriber = SubscriberFactory::new(&db, mosque.id)
///     .phone("+27821234567")
///     .status("unsubscribed")
///     .notify_audio(true)
///     .build()
///     .await?;
/// ```
pub struct SubscriberFactory<'a> {
    db: &'a DatabaseConnection,
    mosque_id: i32,
    phone: String,
    status: String,
    notify_announcements: bool,
    notify_prayer_reminders: bool,
    notify_audio: bool,
}

impl<'a> SubscriberFactory<'a> {
    /// Creates a new SubscriberFactory with default values.
    ///
    /// Defaults:
    /// - phone: unique `+2782…` number
    /// - status: `"active"`
    /// - notify_announcements: `true`
    /// - notify_prayer_reminders: `false`
    /// - notify_audio: `false`
    pub fn new(db: &'a DatabaseConnection, mosque_id: i32) -> Self {
        Self {
            db,
            mosque_id,
            phone: next_phone(),
            status: "active".to_string(),
            notify_announcements: true,
            notify_prayer_reminders: false,
            notify_audio: false,
        }
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    pub fn notify_announcements(mut self, notify: bool) -> Self {
        self.notify_announcements = notify;
        self
    }

    pub fn notify_prayer_reminders(mut self, notify: bool) -> Self {
        self.notify_prayer_reminders = notify;
        self
    }

    pub fn notify_audio(mut self, notify: bool) -> Self {
        self.notify_audio = notify;
        self
    }

    /// Inserts the subscriber into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created subscriber entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::subscriber::Model, DbErr> {
        let now = Utc::now();

        entity::subscriber::ActiveModel {
            mosque_id: ActiveValue::Set(self.mosque_id),
            phone: ActiveValue::Set(self.phone),
            status: ActiveValue::Set(self.status),
            notify_announcements: ActiveValue::Set(self.notify_announcements),
            notify_prayer_reminders: ActiveValue::Set(self.notify_prayer_reminders),
            notify_audio: ActiveValue::Set(self.notify_audio),
            reminder_offset_minutes: ActiveValue::Set(None),
            push_endpoint: ActiveValue::Set(None),
            push_p256dh: ActiveValue::Set(None),
            push_auth: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a subscriber with default values.
pub async fn create_subscriber(
    db: &DatabaseConnection,
    mosque_id: i32,
) -> Result<entity::subscriber::Model, DbErr> {
    SubscriberFactory::new(db, mosque_id).build().await
}
