//! Services module
//!
//! Typed operations over the resilient API client, one service per area of
//! the Mini App

pub mod admin;
pub mod auth;
pub mod complaints;
pub mod meters;
pub mod notifications;
pub mod profile;
pub mod support;

// Re-export commonly used services
pub use admin::{AdminComplaint, AdminService, AdminStats, AdminUser, ComplaintStatusUpdate};
pub use auth::AuthService;
pub use complaints::{ComplaintService, CreatedComplaint};
pub use meters::{MeterService, SubmittedReading};
pub use notifications::NotificationService;
pub use profile::ProfileService;
pub use support::{ChatTurn, SupportChatService};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::store::LocalStore;
use crate::utils::errors::{DomovoyError, Result};

/// Deserialize a whole response
pub(crate) fn from_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value).map_err(|e| DomovoyError::InvalidResponse(e.to_string()))
}

/// Deserialize one top-level field of a response
pub(crate) fn extract<T: DeserializeOwned>(mut value: Value, field: &str) -> Result<T> {
    let inner = value
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| DomovoyError::InvalidResponse(format!("missing field `{field}`")))?;
    from_value(inner)
}

/// Check the `{"success": true}` envelope
pub(crate) fn ensure_success(value: &Value) -> Result<()> {
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        Ok(())
    } else {
        Err(DomovoyError::InvalidResponse(
            "backend did not report success".to_string(),
        ))
    }
}

/// Service factory wiring every service over one shared client
#[derive(Debug, Clone)]
pub struct ServiceFactory {
    pub auth: AuthService,
    pub profile: ProfileService,
    pub meters: MeterService,
    pub complaints: ComplaintService,
    pub notifications: NotificationService,
    /// Present only when the admin panel feature is enabled
    pub admin: Option<AdminService>,
    /// Present only when the support chat feature is enabled
    pub support: Option<SupportChatService>,
}

impl ServiceFactory {
    pub fn new(client: ApiClient, store: LocalStore, settings: &Settings) -> Self {
        Self {
            auth: AuthService::new(client.clone(), store),
            profile: ProfileService::new(client.clone()),
            meters: MeterService::new(client.clone()),
            complaints: ComplaintService::new(client.clone()),
            notifications: NotificationService::new(client.clone()),
            admin: settings
                .features
                .admin_panel
                .then(|| AdminService::new(client.clone())),
            support: settings
                .features
                .support_chat
                .then(|| SupportChatService::new(client)),
        }
    }
}
