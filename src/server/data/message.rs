//! Message data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::message::{
    CreateMessageParam, Message, MessageStatus, UpdateMessageParam,
};

/// Repository providing database operations for announcements and
/// scheduled messages.
pub struct MessageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a message.
    ///
    /// A future `scheduled_at` stores the message as "scheduled" for the
    /// dispatch job; otherwise it is stored as a "draft".
    ///
    /// # Arguments
    /// - `param` - Message content, category, and optional schedule time
    ///
    /// # Returns
    /// - `Ok(Message)` - The created message
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: CreateMessageParam) -> Result<Message, DbErr> {
        let status = if param.scheduled_at.is_some() {
            MessageStatus::Scheduled
        } else {
            MessageStatus::Draft
        };

        let entity = entity::message::ActiveModel {
            mosque_id: ActiveValue::Set(param.mosque_id),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            category: ActiveValue::Set(param.category),
            status: ActiveValue::Set(status.as_str().to_string()),
            scheduled_at: ActiveValue::Set(param.scheduled_at),
            recipient_count: ActiveValue::Set(0),
            sent_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Message::from_entity(entity))
    }

    /// Retrieves messages for a mosque with pagination, newest first.
    ///
    /// # Returns
    /// - `Ok((messages, total))` - Page of messages and total row count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        mosque_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Message>, u64), DbErr> {
        let paginator = entity::prelude::Message::find()
            .filter(entity::message::Column::MosqueId.eq(mosque_id))
            .order_by_desc(entity::message::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Message::from_entity).collect(),
            total,
        ))
    }

    /// Finds a message by id within a mosque.
    pub async fn find_by_id(&self, mosque_id: i32, id: i32) -> Result<Option<Message>, DbErr> {
        let entity = entity::prelude::Message::find_by_id(id)
            .filter(entity::message::Column::MosqueId.eq(mosque_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Message::from_entity))
    }

    /// Updates an unsent message's content and schedule.
    ///
    /// Re-derives the draft/scheduled status from the new `scheduled_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Message))` - Updated message
    /// - `Ok(None)` - No such message in this mosque
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        mosque_id: i32,
        id: i32,
        param: UpdateMessageParam,
    ) -> Result<Option<Message>, DbErr> {
        let Some(existing) = entity::prelude::Message::find_by_id(id)
            .filter(entity::message::Column::MosqueId.eq(mosque_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let status = if param.scheduled_at.is_some() {
            MessageStatus::Scheduled
        } else {
            MessageStatus::Draft
        };

        let mut model: entity::message::ActiveModel = existing.into();
        model.title = ActiveValue::Set(param.title);
        model.body = ActiveValue::Set(param.body);
        model.category = ActiveValue::Set(param.category);
        model.scheduled_at = ActiveValue::Set(param.scheduled_at);
        model.status = ActiveValue::Set(status.as_str().to_string());

        let entity = model.update(self.db).await?;

        Ok(Some(Message::from_entity(entity)))
    }

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(true)` - Message deleted
    /// - `Ok(false)` - No such message in this mosque
    pub async fn delete(&self, mosque_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::Id.eq(id))
            .filter(entity::message::Column::MosqueId.eq(mosque_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Retrieves scheduled messages whose dispatch time has passed.
    ///
    /// The dispatch job calls this every minute; only messages still in
    /// "scheduled" status are returned, so a message is picked up once.
    ///
    /// # Arguments
    /// - `now` - Current UTC time
    ///
    /// # Returns
    /// - `Ok(Vec<Message>)` - Due messages across all mosques
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_due_scheduled(&self, now: DateTime<Utc>) -> Result<Vec<Message>, DbErr> {
        let entities = entity::prelude::Message::find()
            .filter(entity::message::Column::Status.eq(MessageStatus::Scheduled.as_str()))
            .filter(entity::message::Column::ScheduledAt.lte(now))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Message::from_entity).collect())
    }

    /// Marks a message as sent with its delivery bookkeeping.
    pub async fn mark_sent(&self, id: i32, recipient_count: i32) -> Result<(), DbErr> {
        entity::prelude::Message::update_many()
            .filter(entity::message::Column::Id.eq(id))
            .col_expr(
                entity::message::Column::Status,
                sea_orm::sea_query::Expr::value(MessageStatus::Sent.as_str()),
            )
            .col_expr(
                entity::message::Column::RecipientCount,
                sea_orm::sea_query::Expr::value(recipient_count),
            )
            .col_expr(
                entity::message::Column::SentAt,
                sea_orm::sea_query::Expr::value(Some(Utc::now())),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Marks a message as failed so it is not retried by the dispatch job.
    pub async fn mark_failed(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Message::update_many()
            .filter(entity::message::Column::Id.eq(id))
            .col_expr(
                entity::message::Column::Status,
                sea_orm::sea_query::Expr::value(MessageStatus::Failed.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
