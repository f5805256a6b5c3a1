//! Domovoy — client SDK for a housing-management Telegram Mini App
//!
//! This library talks to the управляющая компания (УК) backend on behalf of
//! the resident-facing Mini App: submitting meter readings, filing complaints,
//! managing profiles and notifications, and exposing the admin panel
//! operations. When the backend is unreachable, a fixed set of operations is
//! served from a persisted local store so residents can keep working offline.

pub mod api;
pub mod config;
pub mod events;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{DomovoyError, Result};

// Re-export main components for easy access
pub use api::{ApiClient, Endpoint, FailureKind};
pub use events::{AppEvent, EventBus};
pub use services::ServiceFactory;
pub use store::LocalStore;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
