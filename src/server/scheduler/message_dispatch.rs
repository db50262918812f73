use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    error::AppError, service::message::MessageService, service::whatsapp::WhatsAppClient,
};

/// Starts the scheduled message dispatcher.
///
/// Runs every minute and sends any "scheduled" message whose dispatch time
/// has passed to its opted-in subscribers. Per-message failures are logged
/// and do not stop the sweep.
///
/// # Arguments
/// - `db`: Database connection
/// - `whatsapp`: WhatsApp gateway handle for delivery
pub async fn start_scheduler(
    db: DatabaseConnection,
    whatsapp: WhatsAppClient,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_whatsapp = whatsapp.clone();

    // Schedule job to run every minute
    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let whatsapp = job_whatsapp.clone();

        Box::pin(async move {
            let message_service = MessageService::new(&db);
            if let Err(e) = message_service.dispatch_due(&whatsapp).await {
                tracing::error!("Error dispatching scheduled messages: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Message dispatch scheduler started");

    Ok(())
}
