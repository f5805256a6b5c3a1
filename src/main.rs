//! Domovoy client
//!
//! Main application entry point: loads configuration, opens the local store,
//! wires the resilient client and services, probes the backend, and reports
//! whether the app starts online or offline.

use tracing::{info, warn};

use domovoy::{
    api::ApiClient,
    config::Settings,
    events::{AppEvent, EventBus},
    services::ServiceFactory,
    store::LocalStore,
    utils::logging,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let settings = Settings::new()?;
    settings.validate()?;

    let _log_guard = logging::init_logging(&settings.logging)?;
    info!("Starting {}", domovoy::info());

    let store = LocalStore::open(&settings.storage.path)?;
    let events = EventBus::new();

    // Log client events as they happen; a UI layer would subscribe the same way.
    let mut receiver = events.subscribe();
    tokio::spawn(async move {
        while let Ok(event) = receiver.recv().await {
            match event {
                AppEvent::SessionExpired => warn!("Session expired, login required"),
                AppEvent::OfflineMode { reason } => {
                    warn!(reason = %reason, "Working in offline mode")
                }
                AppEvent::Notice { text } => info!(notice = %text, "Notice"),
            }
        }
    });

    let client = ApiClient::new(&settings, store.clone(), events.clone())?;
    let services = ServiceFactory::new(client.clone(), store.clone(), &settings);

    if client.is_online().await {
        info!(base_url = %settings.api.base_url, "Backend is reachable");
    } else if settings.features.offline_fallback {
        warn!("Backend is unreachable, offline fallback is active");
    } else {
        warn!("Backend is unreachable and offline fallback is disabled");
    }

    match store.session_user() {
        Some(user) => info!(user_id = user.id, "Resuming persisted session"),
        None => info!("No persisted session, authentication required"),
    }

    if services.admin.is_some() {
        info!("Admin panel operations are enabled");
    }
    if services.support.is_some() {
        info!("Support chat is enabled");
    }

    Ok(())
}
