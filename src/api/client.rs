//! Resilient API client
//!
//! Composition of the dispatcher, the failure classifier, and the offline
//! responder. Control flow per request:
//!
//! dispatch → success: return
//!          → failure: classify
//!              unauthorized → clear session, publish SessionExpired, then
//!                             try the offline responder like any outage
//!              tls/network  → publish OfflineMode, try the offline responder
//!              unhandled    → re-raise
//!
//! When the offline responder has no handler for the operation, the original
//! dispatch error is re-raised so callers never see a synthesized response of
//! the wrong shape.

use serde_json::Value;
use tracing::{debug, info};

use crate::config::Settings;
use crate::events::{AppEvent, EventBus};
use crate::store::LocalStore;
use crate::utils::errors::{DomovoyError, Result};
use crate::utils::logging::log_fallback;

use super::classify::{classify, FailureKind};
use super::dispatcher::Dispatcher;
use super::endpoint::Endpoint;
use super::fallback;

#[derive(Debug, Clone)]
pub struct ApiClient {
    dispatcher: Dispatcher,
    store: LocalStore,
    events: EventBus,
    offline_fallback: bool,
}

impl ApiClient {
    pub fn new(settings: &Settings, store: LocalStore, events: EventBus) -> Result<Self> {
        let dispatcher = Dispatcher::new(&settings.api, store.clone())?;
        Ok(Self {
            dispatcher,
            store,
            events,
            offline_fallback: settings.features.offline_fallback,
        })
    }

    /// Execute an operation, recovering through the offline responder when
    /// the failure class allows it
    pub async fn execute(&self, endpoint: Endpoint, body: Option<Value>) -> Result<Value> {
        match self.dispatcher.dispatch(&endpoint, body.as_ref()).await {
            Ok(value) => Ok(value),
            Err(error) => self.recover(endpoint, body, error).await,
        }
    }

    /// Execute a binary download. Downloads are never served offline; a 401
    /// still clears the session.
    pub async fn download(&self, endpoint: Endpoint) -> Result<Vec<u8>> {
        match self.dispatcher.download(&endpoint).await {
            Ok(bytes) => Ok(bytes),
            Err(error) => {
                if classify(&error) == FailureKind::Unauthorized {
                    self.expire_session()?;
                }
                Err(error)
            }
        }
    }

    /// Probe the backend directly, bypassing the offline responder
    pub async fn is_online(&self) -> bool {
        self.dispatcher.dispatch(&Endpoint::Health, None).await.is_ok()
    }

    async fn recover(
        &self,
        endpoint: Endpoint,
        body: Option<Value>,
        error: DomovoyError,
    ) -> Result<Value> {
        let kind = classify(&error);
        debug!(endpoint = ?endpoint, kind = kind.as_str(), error = %error, "Request failed");

        if kind == FailureKind::Unauthorized {
            self.expire_session()?;
        }

        if !kind.is_fallback_eligible() {
            return Err(error);
        }
        if !self.offline_fallback {
            return Err(error);
        }

        if matches!(kind, FailureKind::Tls | FailureKind::Network) {
            self.events.publish(AppEvent::OfflineMode {
                reason: kind.as_str().to_string(),
            });
        }

        log_fallback(endpoint.method().as_str(), &endpoint.path(), kind.as_str());
        match fallback::respond(&endpoint, body.as_ref(), &self.store) {
            Ok(value) => Ok(value),
            Err(fallback_error) => {
                debug!(error = %fallback_error, "Offline responder could not serve the request");
                Err(error)
            }
        }
    }

    /// Drop the persisted session and tell the UI to navigate to login
    fn expire_session(&self) -> Result<()> {
        info!("Backend rejected the token, clearing session");
        self.store.clear_session()?;
        self.events.publish(AppEvent::SessionExpired);
        Ok(())
    }
}
