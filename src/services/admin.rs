//! Admin panel service
//!
//! Operations behind the `is_admin` flag: complaint triage, user and reading
//! overviews, spreadsheet export, broadcast notifications, and the Telegram
//! bot proxy.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{ApiClient, Endpoint, ExportKind};
use crate::models::{Complaint, ComplaintStatus, ComplaintUpdate, MeterReading, NotificationRequest};
use crate::utils::errors::Result;
use crate::utils::logging::log_admin_action;

/// Response of `/admin/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminStats {
    pub total_users: u64,
    pub total_complaints: u64,
    pub total_readings: u64,
    pub active_complaints: u64,
}

/// Complaint joined with resident info, as listed in the admin panel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminComplaint {
    #[serde(flatten)]
    pub complaint: Complaint,
    pub user_name: Option<String>,
    pub address: Option<String>,
}

/// Resident row in the admin user list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub address: Option<String>,
    pub readings_count: u64,
    pub complaints_count: u64,
}

/// Response of PUT `/admin/complaints/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintStatusUpdate {
    pub id: i64,
    pub status: ComplaintStatus,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct AdminService {
    client: ApiClient,
}

impl AdminService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        let value = self.client.execute(Endpoint::AdminStats, None).await?;
        super::from_value(value)
    }

    pub async fn complaints(&self) -> Result<Vec<AdminComplaint>> {
        let value = self.client.execute(Endpoint::AdminComplaints, None).await?;
        super::extract(value, "complaints")
    }

    /// Set a complaint's status and optional response text. Any status may be
    /// set from any other; the backend enforces no transition table.
    pub async fn update_complaint(
        &self,
        id: i64,
        update: ComplaintUpdate,
    ) -> Result<ComplaintStatusUpdate> {
        let body = serde_json::to_value(&update)?;
        let value = self
            .client
            .execute(Endpoint::UpdateComplaint(id), Some(body))
            .await?;
        log_admin_action(
            "update_complaint",
            Some(&id.to_string()),
            Some(&format!("{:?}", update.status)),
        );
        super::from_value(value)
    }

    pub async fn users(&self) -> Result<Vec<AdminUser>> {
        let value = self.client.execute(Endpoint::AdminUsers, None).await?;
        super::extract(value, "users")
    }

    pub async fn meter_readings(&self) -> Result<Vec<MeterReading>> {
        let value = self
            .client
            .execute(Endpoint::AdminMeterReadings, None)
            .await?;
        super::extract(value, "readings")
    }

    pub async fn verify_reading(&self, id: i64) -> Result<()> {
        let value = self
            .client
            .execute(Endpoint::VerifyReading(id), None)
            .await?;
        log_admin_action("verify_reading", Some(&id.to_string()), None);
        super::ensure_success(&value)
    }

    /// Download one of the spreadsheet exports. Exports are never served
    /// offline.
    pub async fn export(&self, kind: ExportKind) -> Result<Vec<u8>> {
        let bytes = self.client.download(Endpoint::AdminExport(kind)).await?;
        log_admin_action("export", Some(kind.as_str()), None);
        Ok(bytes)
    }

    /// Broadcast a notification to residents
    pub async fn broadcast(&self, request: NotificationRequest) -> Result<()> {
        let body = serde_json::to_value(&request)?;
        let value = self
            .client
            .execute(Endpoint::SendNotification, Some(body))
            .await?;
        log_admin_action("broadcast", Some(&request.target), Some(&request.title));
        super::ensure_success(&value)
    }

    /// Raw Telegram bot statistics as reported by the backend proxy
    pub async fn telegram_stats(&self) -> Result<Value> {
        self.client.execute(Endpoint::TelegramStats, None).await
    }

    /// Ask the backend to send a test message through the bot
    pub async fn telegram_test(&self, chat_id: i64) -> Result<()> {
        let body = serde_json::json!({ "chat_id": chat_id });
        let value = self
            .client
            .execute(Endpoint::TelegramTest, Some(body))
            .await?;
        super::ensure_success(&value)
    }
}
