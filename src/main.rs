mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use axum::middleware::from_fn;
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            middleware::redirect::admin_page_redirect,
            scheduler::message_dispatch,
            service::{rate_limit::RateLimiter, storage::StorageClient, whatsapp::WhatsAppClient},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db).await?;
        let http_client = startup::setup_reqwest_client();

        // Hosted service handles are constructed once here and shared
        // through AppState
        let rate_limiter = RateLimiter::from_config(http_client.clone(), &config);
        let whatsapp = WhatsAppClient::from_config(http_client.clone(), &config);
        let storage = StorageClient::from_config(http_client.clone(), &config);

        tracing::info!("Starting server");

        // Seed mosque and admin account on first run
        startup::check_for_admin(&db, &config).await?;

        // Start the scheduled message dispatcher
        let scheduler_db = db.clone();
        let scheduler_whatsapp = whatsapp.clone();
        tokio::spawn(async move {
            if let Err(e) =
                message_dispatch::start_scheduler(scheduler_db, scheduler_whatsapp).await
            {
                tracing::error!("Message dispatch scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router().with_state(AppState::new(
            db,
            http_client,
            rate_limiter,
            whatsapp,
            storage,
            config.webhook_verify_token.clone(),
        ));
        // The redirect middleware covers the page routes too, so the
        // session layer wraps the merged router rather than the API alone
        router = router
            .merge(server_routes)
            .layer(from_fn(admin_page_redirect))
            .layer(session);

        Ok(router)
    })
}
