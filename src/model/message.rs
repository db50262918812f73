use serde::{Deserialize, Serialize};

/// Announcement / scheduled message as shown in the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub category: String,
    pub status: String,
    /// ISO-8601 UTC timestamp when the message should be dispatched.
    pub scheduled_at: Option<String>,
    pub recipient_count: i32,
    pub sent_at: Option<String>,
    pub created_at: String,
}

/// Page of messages with pagination metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedMessagesDto {
    pub messages: Vec<MessageDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Body for creating a draft or scheduled message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CreateMessageDto {
    pub title: String,
    pub body: String,
    pub category: String,
    /// When set the message is created as "scheduled", otherwise as "draft".
    pub scheduled_at: Option<String>,
}

/// Body for editing an unsent message.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateMessageDto {
    pub title: String,
    pub body: String,
    pub category: String,
    pub scheduled_at: Option<String>,
}
