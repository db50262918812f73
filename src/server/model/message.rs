//! Message domain models and operation parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{MessageDto, PaginatedMessagesDto};

/// Message delivery lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Draft,
    Scheduled,
    Sent,
    Failed,
}

impl MessageStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Scheduled => "scheduled",
            Self::Sent => "sent",
            Self::Failed => "failed",
        }
    }
}

/// Announcement or scheduled message with delivery bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub mosque_id: i32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub status: String,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub recipient_count: i32,
    pub sent_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn from_entity(entity: entity::message::Model) -> Self {
        Self {
            id: entity.id,
            mosque_id: entity.mosque_id,
            title: entity.title,
            body: entity.body,
            category: entity.category,
            status: entity.status,
            scheduled_at: entity.scheduled_at,
            recipient_count: entity.recipient_count,
            sent_at: entity.sent_at,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            title: self.title,
            body: self.body,
            category: self.category,
            status: self.status,
            scheduled_at: self.scheduled_at.map(|t| t.to_rfc3339()),
            recipient_count: self.recipient_count,
            sent_at: self.sent_at.map(|t| t.to_rfc3339()),
            created_at: self.created_at.to_rfc3339(),
        }
    }

    /// Whether the message may still be edited or deleted.
    pub fn is_editable(&self) -> bool {
        self.status == MessageStatus::Draft.as_str()
            || self.status == MessageStatus::Scheduled.as_str()
    }
}

/// Parameters for creating a message. A `scheduled_at` in the future makes
/// it a scheduled message, otherwise it is stored as a draft.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    pub mosque_id: i32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Parameters for editing an unsent message.
#[derive(Debug, Clone)]
pub struct UpdateMessageParam {
    pub title: String,
    pub body: String,
    pub category: String,
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// Paginated collection of messages with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMessages {
    pub messages: Vec<Message>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMessages {
    pub fn into_dto(self) -> PaginatedMessagesDto {
        PaginatedMessagesDto {
            messages: self.messages.into_iter().map(|m| m.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
