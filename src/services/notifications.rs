//! Notifications service

use crate::api::{ApiClient, Endpoint};
use crate::models::Notification;
use crate::utils::errors::Result;

#[derive(Debug, Clone)]
pub struct NotificationService {
    client: ApiClient,
}

impl NotificationService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Notification>> {
        let value = self
            .client
            .execute(Endpoint::ListNotifications, None)
            .await?;
        super::extract(value, "notifications")
    }

    /// Toggle the read state of one notification
    pub async fn mark_read(&self, id: i64) -> Result<()> {
        let value = self
            .client
            .execute(Endpoint::MarkNotificationRead(id), None)
            .await?;
        super::ensure_success(&value)
    }
}
