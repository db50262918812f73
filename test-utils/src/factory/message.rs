//! Message factory for creating test announcements and scheduled messages.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    mosque_id: i32,
    title: String,
    body: String,
    category: String,
    status: String,
    scheduled_at: Option<DateTime<Utc>>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Message {id}"` where id is auto-incremented
    /// - body: `"Body {id}"`
    /// - category: `"announcement"`
    /// - status: `"draft"`
    /// - scheduled_at: `None`
    pub fn new(db: &'a DatabaseConnection, mosque_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            mosque_id,
            title: format!("Message {}", id),
            body: format!("Body {}", id),
            category: "announcement".to_string(),
            status: "draft".to_string(),
            scheduled_at: None,
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = status.to_string();
        self
    }

    /// Marks the message as scheduled for the given time.
    pub fn scheduled_at(mut self, scheduled_at: DateTime<Utc>) -> Self {
        self.scheduled_at = Some(scheduled_at);
        self.status = "scheduled".to_string();
        self
    }

    /// Inserts the message into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created message entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            mosque_id: ActiveValue::Set(self.mosque_id),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            scheduled_at: ActiveValue::Set(self.scheduled_at),
            recipient_count: ActiveValue::Set(0),
            sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a draft message with default values.
pub async fn create_message(
    db: &DatabaseConnection,
    mosque_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, mosque_id).build().await
}
