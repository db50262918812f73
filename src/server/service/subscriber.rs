//! Subscriber business logic: public subscribe, bulk import, dashboard
//! management, webhook self-service commands, and push key registration.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        phone::normalize_phone_number,
        subscriber::{ImportSubscriberDto, PushSubscriptionDto},
    },
    server::{
        data::subscriber::SubscriberRepository,
        error::AppError,
        model::subscriber::{
            ImportOutcome, PaginatedSubscribers, SetPushSubscriptionParam, Subscriber,
            SubscriberStatus, UpdateSubscriberParam, UpsertSubscriberParam,
        },
    },
};

/// Hard cap on records accepted by one bulk import request.
pub const MAX_IMPORT_RECORDS: usize = 1000;

/// Valid records are inserted in fixed-size batches of this many rows.
pub const IMPORT_BATCH_SIZE: usize = 50;

/// Service providing business logic for subscriber management.
pub struct SubscriberService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriberService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Subscribes a phone number from the public form or admin create.
    ///
    /// Validates and normalizes the raw phone, then upserts so an existing
    /// (possibly unsubscribed) number is reactivated with the submitted
    /// preferences.
    ///
    /// # Arguments
    /// - `mosque_id` - Tenant the subscription belongs to
    /// - `raw_phone` - Phone exactly as the user entered it
    /// - `notify_announcements` / `notify_prayer_reminders` / `notify_audio` -
    ///   Category opt-ins
    ///
    /// # Returns
    /// - `Ok(Subscriber)` - The active subscriber
    /// - `Err(AppError::BadRequest)` - Phone failed validation
    /// - `Err(AppError::DbErr)` - Database error during upsert
    pub async fn subscribe(
        &self,
        mosque_id: i32,
        raw_phone: &str,
        notify_announcements: bool,
        notify_prayer_reminders: bool,
        notify_audio: bool,
    ) -> Result<Subscriber, AppError> {
        let Some(phone) = normalize_phone_number(raw_phone) else {
            return Err(AppError::BadRequest(
                "Please enter a valid South African phone number.".to_string(),
            ));
        };

        let subscriber_repo = SubscriberRepository::new(self.db);
        let subscriber = subscriber_repo
            .upsert(UpsertSubscriberParam {
                mosque_id,
                phone,
                notify_announcements,
                notify_prayer_reminders,
                notify_audio,
            })
            .await?;

        Ok(subscriber)
    }

    /// Imports a CSV-style batch of candidate subscribers.
    ///
    /// Each record is validated and normalized independently; invalid
    /// phones are discarded and counted as skipped. Valid records are
    /// inserted in batches of [`IMPORT_BATCH_SIZE`] with duplicates
    /// silently deduplicated against existing rows. A failed batch adds
    /// its record count to the error tally and processing continues with
    /// the next batch; there is no rollback and no retry.
    ///
    /// # Arguments
    /// - `mosque_id` - Tenant receiving the import
    /// - `records` - Candidate records, at most [`MAX_IMPORT_RECORDS`]
    ///
    /// # Returns
    /// - `Ok(ImportOutcome)` - Counts of imported, skipped, and errored records
    /// - `Err(AppError::BadRequest)` - Empty request or size cap exceeded
    pub async fn import(
        &self,
        mosque_id: i32,
        records: Vec<ImportSubscriberDto>,
    ) -> Result<ImportOutcome, AppError> {
        if records.is_empty() {
            return Err(AppError::BadRequest(
                "No subscribers provided.".to_string(),
            ));
        }

        if records.len() > MAX_IMPORT_RECORDS {
            return Err(AppError::BadRequest(format!(
                "Import is limited to {MAX_IMPORT_RECORDS} subscribers per request."
            )));
        }

        let mut outcome = ImportOutcome::default();
        let mut valid = Vec::with_capacity(records.len());

        for record in records {
            match normalize_phone_number(&record.phone) {
                Some(phone) => valid.push(UpsertSubscriberParam {
                    mosque_id,
                    phone,
                    notify_announcements: record.notify_announcements,
                    notify_prayer_reminders: record.notify_prayer_reminders,
                    notify_audio: record.notify_audio,
                }),
                None => outcome.skipped += 1,
            }
        }

        let subscriber_repo = SubscriberRepository::new(self.db);

        for batch in valid.chunks(IMPORT_BATCH_SIZE) {
            match subscriber_repo.insert_batch(batch).await {
                Ok(inserted) => {
                    outcome.imported += batch.len();
                    if (inserted as usize) < batch.len() {
                        tracing::debug!(
                            "Import batch deduplicated {} existing numbers",
                            batch.len() - inserted as usize
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Import batch failed: {}", e);
                    outcome.errors += batch.len();
                }
            }
        }

        Ok(outcome)
    }

    /// Retrieves subscribers for the dashboard table with pagination.
    pub async fn get_paginated(
        &self,
        mosque_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedSubscribers, AppError> {
        let subscriber_repo = SubscriberRepository::new(self.db);
        let (subscribers, total) = subscriber_repo
            .get_paginated(mosque_id, page, per_page)
            .await?;

        let total_pages = (total as f64 / per_page as f64).ceil() as u64;

        Ok(PaginatedSubscribers {
            subscribers,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    /// Updates a subscriber's status and preferences.
    ///
    /// # Returns
    /// - `Ok(Subscriber)` - The updated subscriber
    /// - `Err(AppError::NotFound)` - No such subscriber in this mosque
    pub async fn update(
        &self,
        mosque_id: i32,
        id: i32,
        param: UpdateSubscriberParam,
    ) -> Result<Subscriber, AppError> {
        let subscriber_repo = SubscriberRepository::new(self.db);
        let updated = subscriber_repo.update(mosque_id, id, param).await?;

        updated.ok_or_else(|| AppError::NotFound("Subscriber not found".to_string()))
    }

    /// Deletes a subscriber.
    ///
    /// # Returns
    /// - `Ok(())` - Subscriber removed
    /// - `Err(AppError::NotFound)` - No such subscriber in this mosque
    pub async fn delete(&self, mosque_id: i32, id: i32) -> Result<(), AppError> {
        let subscriber_repo = SubscriberRepository::new(self.db);

        if !subscriber_repo.delete(mosque_id, id).await? {
            return Err(AppError::NotFound("Subscriber not found".to_string()));
        }

        Ok(())
    }

    /// Stores Web Push keys for a subscriber identified by phone.
    ///
    /// # Returns
    /// - `Ok(())` - Keys stored
    /// - `Err(AppError::BadRequest)` - Phone failed validation
    /// - `Err(AppError::NotFound)` - Phone is not subscribed to this mosque
    pub async fn set_push_subscription(
        &self,
        mosque_id: i32,
        dto: PushSubscriptionDto,
    ) -> Result<(), AppError> {
        let Some(phone) = normalize_phone_number(&dto.phone) else {
            return Err(AppError::BadRequest(
                "Please enter a valid South African phone number.".to_string(),
            ));
        };

        let subscriber_repo = SubscriberRepository::new(self.db);
        let stored = subscriber_repo
            .set_push_subscription(
                mosque_id,
                &phone,
                SetPushSubscriptionParam {
                    endpoint: dto.endpoint,
                    p256dh: dto.p256dh,
                    auth: dto.auth,
                },
            )
            .await?;

        if !stored {
            return Err(AppError::NotFound(
                "That number is not subscribed.".to_string(),
            ));
        }

        Ok(())
    }

    /// Applies a webhook self-service command from an inbound message.
    ///
    /// Recognized commands (case-insensitive): STOP → unsubscribed,
    /// START → active, PAUSE → paused. Anything else is ignored.
    ///
    /// # Arguments
    /// - `mosque_id` - Tenant the message arrived for
    /// - `from` - Sender phone in any accepted format
    /// - `text` - Message body
    ///
    /// # Returns
    /// - `Ok(Some(status))` - Command applied, subscriber now in this status
    /// - `Ok(None)` - Unrecognized command or unknown sender
    /// - `Err(AppError)` - Validation or database error
    pub async fn apply_webhook_command(
        &self,
        mosque_id: i32,
        from: &str,
        text: &str,
    ) -> Result<Option<SubscriberStatus>, AppError> {
        let Some(status) = parse_command(text) else {
            return Ok(None);
        };

        let Some(phone) = normalize_phone_number(from) else {
            return Err(AppError::BadRequest("Invalid sender phone".to_string()));
        };

        let subscriber_repo = SubscriberRepository::new(self.db);
        let updated = subscriber_repo
            .set_status_by_phone(mosque_id, &phone, status)
            .await?;

        if updated {
            tracing::info!("Webhook set {} to {}", phone, status.as_str());
            Ok(Some(status))
        } else {
            Ok(None)
        }
    }
}

/// Maps an inbound message body to a self-service command.
fn parse_command(text: &str) -> Option<SubscriberStatus> {
    match text.trim().to_ascii_lowercase().as_str() {
        "stop" => Some(SubscriberStatus::Unsubscribed),
        "start" => Some(SubscriberStatus::Active),
        "pause" => Some(SubscriberStatus::Paused),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn import_record(phone: &str) -> ImportSubscriberDto {
        ImportSubscriberDto {
            phone: phone.to_string(),
            notify_announcements: true,
            notify_prayer_reminders: false,
            notify_audio: false,
        }
    }

    #[test]
    fn recognizes_commands_case_insensitively() {
        assert_eq!(parse_command("STOP"), Some(SubscriberStatus::Unsubscribed));
        assert_eq!(parse_command("  start "), Some(SubscriberStatus::Active));
        assert_eq!(parse_command("Pause"), Some(SubscriberStatus::Paused));
    }

    #[test]
    fn ignores_everything_else() {
        assert_eq!(parse_command("hello"), None);
        assert_eq!(parse_command("stop please"), None);
        assert_eq!(parse_command(""), None);
    }

    /// Tests import counting over mixed-validity input.
    ///
    /// One record duplicates an existing subscriber, one is new, one has a
    /// malformed phone. Expected: imported 2, skipped 1, errors 0, and the
    /// duplicate deduplicated rather than doubled.
    #[tokio::test]
    async fn import_counts_mixed_validity_input() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_subscriber_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let mosque = factory::create_mosque(db).await?;

        factory::subscriber::SubscriberFactory::new(db, mosque.id)
            .phone("+27821234567")
            .build()
            .await?;

        let service = SubscriberService::new(db);
        let outcome = service
            .import(
                mosque.id,
                vec![
                    import_record("082 123 4567"),
                    import_record("0831234568"),
                    import_record("12345"),
                ],
            )
            .await?;

        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.skipped, 1);
        assert_eq!(outcome.errors, 0);

        let repo = SubscriberRepository::new(db);
        let (_, total) = repo.get_paginated(mosque.id, 0, 10).await?;
        assert_eq!(total, 2);

        Ok(())
    }

    /// Tests the import size cap.
    ///
    /// Expected: Err(AppError::BadRequest) without touching the database
    #[tokio::test]
    async fn import_rejects_oversized_request() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_subscriber_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let mosque = factory::create_mosque(db).await?;

        let records = (0..=MAX_IMPORT_RECORDS)
            .map(|_| import_record("0821234567"))
            .collect();

        let service = SubscriberService::new(db);
        let result = service.import(mosque.id, records).await;

        match result.unwrap_err() {
            AppError::BadRequest(message) => {
                assert!(message.contains(&MAX_IMPORT_RECORDS.to_string()));
            }
            e => panic!("Expected BadRequest error, got: {:?}", e),
        }

        let repo = SubscriberRepository::new(db);
        let (_, total) = repo.get_paginated(mosque.id, 0, 10).await?;
        assert_eq!(total, 0);

        Ok(())
    }
}
