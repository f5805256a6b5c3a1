//! Resilient API client module
//!
//! Dispatcher, failure classifier, and offline fallback responder

pub mod classify;
pub mod client;
pub mod dispatcher;
pub mod endpoint;
pub mod fallback;

pub use classify::{classify, FailureKind};
pub use client::ApiClient;
pub use dispatcher::Dispatcher;
pub use endpoint::{Endpoint, ExportKind};
