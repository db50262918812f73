//! Message business logic: dashboard CRUD, immediate sends, and dispatch
//! of due scheduled messages.

use chrono::Utc;
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{message::MessageRepository, subscriber::SubscriberRepository},
    error::AppError,
    model::message::{CreateMessageParam, Message, PaginatedMessages, UpdateMessageParam},
    service::whatsapp::WhatsAppClient,
};

/// Service providing business logic for announcements and scheduled
/// messages.
pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a draft or scheduled message.
    ///
    /// # Returns
    /// - `Ok(Message)` - The created message
    /// - `Err(AppError::BadRequest)` - Empty title or body
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, AppError> {
        if param.title.trim().is_empty() || param.body.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and body are required.".to_string(),
            ));
        }

        let message_repo = MessageRepository::new(self.db);
        let message = message_repo.create(param).await?;

        Ok(message)
    }

    /// Retrieves messages for the dashboard table with pagination.
    pub async fn get_paginated(
        &self,
        mosque_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMessages, AppError> {
        let message_repo = MessageRepository::new(self.db);
        let (messages, total) = message_repo.get_paginated(mosque_id, page, per_page).await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedMessages {
            messages,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a message that has not been sent yet.
    ///
    /// # Returns
    /// - `Ok(Message)` - The updated message
    /// - `Err(AppError::NotFound)` - No such message in this mosque
    /// - `Err(AppError::BadRequest)` - Message already sent or failed
    pub async fn update(
        &self,
        mosque_id: i32,
        id: i32,
        param: UpdateMessageParam,
    ) -> Result<Message, AppError> {
        if param.title.trim().is_empty() || param.body.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Title and body are required.".to_string(),
            ));
        }

        let message_repo = MessageRepository::new(self.db);
        let Some(existing) = message_repo.find_by_id(mosque_id, id).await? else {
            return Err(AppError::NotFound("Message not found".to_string()));
        };

        if !existing.is_editable() {
            return Err(AppError::BadRequest(
                "Sent messages cannot be edited.".to_string(),
            ));
        }

        let updated = message_repo.update(mosque_id, id, param).await?;

        updated.ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// Deletes an unsent message.
    ///
    /// # Returns
    /// - `Ok(())` - Message deleted
    /// - `Err(AppError::NotFound)` - No such message in this mosque
    /// - `Err(AppError::BadRequest)` - Message already sent or failed
    pub async fn delete(&self, mosque_id: i32, id: i32) -> Result<(), AppError> {
        let message_repo = MessageRepository::new(self.db);
        let Some(existing) = message_repo.find_by_id(mosque_id, id).await? else {
            return Err(AppError::NotFound("Message not found".to_string()));
        };

        if !existing.is_editable() {
            return Err(AppError::BadRequest(
                "Sent messages cannot be deleted.".to_string(),
            ));
        }

        message_repo.delete(mosque_id, id).await?;

        Ok(())
    }

    /// Sends a draft or scheduled message immediately.
    ///
    /// # Returns
    /// - `Ok(Message)` - The message with its sent bookkeeping
    /// - `Err(AppError::NotFound)` - No such message in this mosque
    /// - `Err(AppError::BadRequest)` - Message already sent or failed
    pub async fn send_now(
        &self,
        whatsapp: &WhatsAppClient,
        mosque_id: i32,
        id: i32,
    ) -> Result<Message, AppError> {
        let message_repo = MessageRepository::new(self.db);
        let Some(message) = message_repo.find_by_id(mosque_id, id).await? else {
            return Err(AppError::NotFound("Message not found".to_string()));
        };

        if !message.is_editable() {
            return Err(AppError::BadRequest(
                "This message has already been sent.".to_string(),
            ));
        }

        self.deliver(whatsapp, &message).await?;

        let sent = message_repo
            .find_by_id(mosque_id, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

        Ok(sent)
    }

    /// Dispatches every scheduled message whose time has passed.
    ///
    /// Called by the minutely scheduler job. Each message is delivered
    /// independently; one failing delivery does not stop the rest.
    pub async fn dispatch_due(&self, whatsapp: &WhatsAppClient) -> Result<(), AppError> {
        let message_repo = MessageRepository::new(self.db);
        let due = message_repo.get_due_scheduled(Utc::now()).await?;

        if due.is_empty() {
            return Ok(());
        }

        tracing::info!("Dispatching {} due scheduled message(s)", due.len());

        for message in due {
            if let Err(e) = self.deliver(whatsapp, &message).await {
                tracing::error!("Failed to dispatch message {}: {}", message.id, e);
            }
        }

        Ok(())
    }

    /// Delivers one message to its opted-in recipients and records the
    /// outcome.
    ///
    /// Individual recipient failures are logged and skipped; the message is
    /// marked failed only when no recipient could be reached at all while
    /// recipients existed.
    async fn deliver(&self, whatsapp: &WhatsAppClient, message: &Message) -> Result<(), AppError> {
        let subscriber_repo = SubscriberRepository::new(self.db);
        let message_repo = MessageRepository::new(self.db);

        let recipients = subscriber_repo
            .get_active_by_category(message.mosque_id, &message.category)
            .await?;

        let body = format!("*{}*\n\n{}", message.title, message.body);
        let mut delivered = 0;

        for recipient in &recipients {
            match whatsapp.send_text(&recipient.phone, &body).await {
                Ok(()) => delivered += 1,
                Err(e) => {
                    tracing::warn!("Send to {} failed: {}", recipient.phone, e);
                }
            }
        }

        if delivered == 0 && !recipients.is_empty() {
            message_repo.mark_failed(message.id).await?;
            return Err(AppError::InternalError(format!(
                "Message {} reached none of its {} recipients",
                message.id,
                recipients.len()
            )));
        }

        message_repo.mark_sent(message.id, delivered).await?;
        tracing::info!(
            "Message {} sent to {}/{} recipients",
            message.id,
            delivered,
            recipients.len()
        );

        Ok(())
    }
}
