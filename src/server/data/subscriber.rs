//! Subscriber data repository for database operations.
//!
//! Handles subscriber creation with upsert-dedup semantics keyed on
//! (mosque_id, phone), batched inserts for bulk import, pagination for the
//! dashboard table, and status transitions driven by admins and the inbound
//! webhook.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::subscriber::{
    SetPushSubscriptionParam, Subscriber, SubscriberStatus, UpdateSubscriberParam,
    UpsertSubscriberParam,
};

/// Repository providing database operations for subscriber management.
pub struct SubscriberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a subscriber from the public subscribe form.
    ///
    /// Inserts a new active subscriber, or reactivates an existing one for
    /// the same (mosque, phone) and refreshes their category preferences.
    /// A previously unsubscribed number that subscribes again becomes active.
    ///
    /// # Arguments
    /// - `param` - Canonical phone and category preferences
    ///
    /// # Returns
    /// - `Ok(Subscriber)` - The created or reactivated subscriber
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertSubscriberParam) -> Result<Subscriber, DbErr> {
        let now = Utc::now();

        let entity = entity::prelude::Subscriber::insert(entity::subscriber::ActiveModel {
            mosque_id: ActiveValue::Set(param.mosque_id),
            phone: ActiveValue::Set(param.phone),
            status: ActiveValue::Set(SubscriberStatus::Active.as_str().to_string()),
            notify_announcements: ActiveValue::Set(param.notify_announcements),
            notify_prayer_reminders: ActiveValue::Set(param.notify_prayer_reminders),
            notify_audio: ActiveValue::Set(param.notify_audio),
            reminder_offset_minutes: ActiveValue::Set(None),
            push_endpoint: ActiveValue::Set(None),
            push_p256dh: ActiveValue::Set(None),
            push_auth: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::columns([
                entity::subscriber::Column::MosqueId,
                entity::subscriber::Column::Phone,
            ])
            .update_columns([
                entity::subscriber::Column::Status,
                entity::subscriber::Column::NotifyAnnouncements,
                entity::subscriber::Column::NotifyPrayerReminders,
                entity::subscriber::Column::NotifyAudio,
                entity::subscriber::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Subscriber::from_entity(entity))
    }

    /// Inserts one batch of import records, ignoring duplicates.
    ///
    /// Uses `ON CONFLICT (mosque_id, phone) DO NOTHING` so numbers already
    /// registered are silently deduplicated rather than erroring the batch.
    /// Phones must already be validated and normalized by the caller.
    ///
    /// # Arguments
    /// - `params` - One batch of upsert parameters
    ///
    /// # Returns
    /// - `Ok(rows)` - Number of rows actually inserted (duplicates excluded)
    /// - `Err(DbErr)` - Database error; the whole batch is lost
    pub async fn insert_batch(&self, params: &[UpsertSubscriberParam]) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = params.iter().map(|param| entity::subscriber::ActiveModel {
            mosque_id: ActiveValue::Set(param.mosque_id),
            phone: ActiveValue::Set(param.phone.clone()),
            status: ActiveValue::Set(SubscriberStatus::Active.as_str().to_string()),
            notify_announcements: ActiveValue::Set(param.notify_announcements),
            notify_prayer_reminders: ActiveValue::Set(param.notify_prayer_reminders),
            notify_audio: ActiveValue::Set(param.notify_audio),
            reminder_offset_minutes: ActiveValue::Set(None),
            push_endpoint: ActiveValue::Set(None),
            push_p256dh: ActiveValue::Set(None),
            push_auth: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        let result = entity::prelude::Subscriber::insert_many(models)
            .on_conflict(
                OnConflict::columns([
                    entity::subscriber::Column::MosqueId,
                    entity::subscriber::Column::Phone,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(self.db)
            .await;

        match result {
            Ok(rows) => Ok(rows),
            // Every row in the batch collided with an existing subscriber.
            Err(DbErr::RecordNotInserted) => Ok(0),
            Err(err) => Err(err),
        }
    }

    /// Retrieves subscribers for a mosque with pagination.
    ///
    /// Results are ordered by creation time, newest first.
    ///
    /// # Arguments
    /// - `mosque_id` - Owning mosque
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Page size
    ///
    /// # Returns
    /// - `Ok((subscribers, total))` - Page of subscribers and total row count
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn get_paginated(
        &self,
        mosque_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Subscriber>, u64), DbErr> {
        let paginator = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .order_by_desc(entity::subscriber::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Subscriber::from_entity).collect(),
            total,
        ))
    }

    /// Finds a subscriber by id within a mosque.
    pub async fn find_by_id(
        &self,
        mosque_id: i32,
        id: i32,
    ) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::Subscriber::find_by_id(id)
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    /// Finds a subscriber by canonical phone number within a mosque.
    pub async fn find_by_phone(
        &self,
        mosque_id: i32,
        phone: &str,
    ) -> Result<Option<Subscriber>, DbErr> {
        let entity = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .filter(entity::subscriber::Column::Phone.eq(phone))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscriber::from_entity))
    }

    /// Updates a subscriber's status and preferences from the dashboard.
    ///
    /// # Returns
    /// - `Ok(Some(Subscriber))` - Updated subscriber
    /// - `Ok(None)` - No such subscriber in this mosque
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        mosque_id: i32,
        id: i32,
        param: UpdateSubscriberParam,
    ) -> Result<Option<Subscriber>, DbErr> {
        let Some(existing) = entity::prelude::Subscriber::find_by_id(id)
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut model: entity::subscriber::ActiveModel = existing.into();
        model.status = ActiveValue::Set(param.status.as_str().to_string());
        model.notify_announcements = ActiveValue::Set(param.notify_announcements);
        model.notify_prayer_reminders = ActiveValue::Set(param.notify_prayer_reminders);
        model.notify_audio = ActiveValue::Set(param.notify_audio);
        model.reminder_offset_minutes = ActiveValue::Set(param.reminder_offset_minutes);
        model.updated_at = ActiveValue::Set(Utc::now());

        let entity = model.update(self.db).await?;

        Ok(Some(Subscriber::from_entity(entity)))
    }

    /// Sets a subscriber's status by phone number (webhook commands).
    ///
    /// # Returns
    /// - `Ok(true)` - A subscriber was updated
    /// - `Ok(false)` - No subscriber with that phone in this mosque
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_status_by_phone(
        &self,
        mosque_id: i32,
        phone: &str,
        status: SubscriberStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscriber::update_many()
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .filter(entity::subscriber::Column::Phone.eq(phone))
            .col_expr(
                entity::subscriber::Column::Status,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .col_expr(
                entity::subscriber::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Attaches Web Push keys to a subscriber identified by phone.
    ///
    /// # Returns
    /// - `Ok(true)` - Keys stored
    /// - `Ok(false)` - No subscriber with that phone in this mosque
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_push_subscription(
        &self,
        mosque_id: i32,
        phone: &str,
        param: SetPushSubscriptionParam,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscriber::update_many()
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .filter(entity::subscriber::Column::Phone.eq(phone))
            .col_expr(
                entity::subscriber::Column::PushEndpoint,
                sea_orm::sea_query::Expr::value(Some(param.endpoint)),
            )
            .col_expr(
                entity::subscriber::Column::PushP256dh,
                sea_orm::sea_query::Expr::value(Some(param.p256dh)),
            )
            .col_expr(
                entity::subscriber::Column::PushAuth,
                sea_orm::sea_query::Expr::value(Some(param.auth)),
            )
            .col_expr(
                entity::subscriber::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes a subscriber from the dashboard.
    ///
    /// # Returns
    /// - `Ok(true)` - Subscriber deleted
    /// - `Ok(false)` - No such subscriber in this mosque
    pub async fn delete(&self, mosque_id: i32, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscriber::delete_many()
            .filter(entity::subscriber::Column::Id.eq(id))
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Retrieves active subscribers opted into a notification category.
    ///
    /// Used by the dispatch scheduler to resolve a message's recipients.
    /// Unknown categories fall back to the announcements preference.
    ///
    /// # Arguments
    /// - `mosque_id` - Owning mosque
    /// - `category` - Message category ("announcement", "audio", "prayer_reminder")
    ///
    /// # Returns
    /// - `Ok(Vec<Subscriber>)` - Active, opted-in subscribers
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_active_by_category(
        &self,
        mosque_id: i32,
        category: &str,
    ) -> Result<Vec<Subscriber>, DbErr> {
        let category_column = match category {
            "audio" => entity::subscriber::Column::NotifyAudio,
            "prayer_reminder" => entity::subscriber::Column::NotifyPrayerReminders,
            _ => entity::subscriber::Column::NotifyAnnouncements,
        };

        let entities = entity::prelude::Subscriber::find()
            .filter(entity::subscriber::Column::MosqueId.eq(mosque_id))
            .filter(
                entity::subscriber::Column::Status.eq(SubscriberStatus::Active.as_str()),
            )
            .filter(category_column.eq(true))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Subscriber::from_entity).collect())
    }
}
