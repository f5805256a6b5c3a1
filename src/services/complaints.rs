//! Complaints service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{ApiClient, Endpoint};
use crate::models::{Complaint, ComplaintCategory, ComplaintStatus, NewComplaint};
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

/// Backend response for a created complaint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedComplaint {
    pub id: i64,
    pub title: String,
    pub status: ComplaintStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ComplaintService {
    client: ApiClient,
}

impl ComplaintService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn categories(&self) -> Result<Vec<ComplaintCategory>> {
        let value = self
            .client
            .execute(Endpoint::ComplaintCategories, None)
            .await?;
        super::from_value(value)
    }

    pub async fn list(&self) -> Result<Vec<Complaint>> {
        let value = self.client.execute(Endpoint::ListComplaints, None).await?;
        super::extract(value, "complaints")
    }

    /// File a complaint. Title, description, and category are required; the
    /// backend assigns status `new`.
    pub async fn create(&self, complaint: NewComplaint) -> Result<CreatedComplaint> {
        require_field(&complaint.title, "title")?;
        require_field(&complaint.description, "description")?;
        require_field(&complaint.category, "category")?;

        let body = serde_json::to_value(&complaint)?;
        let value = self
            .client
            .execute(Endpoint::CreateComplaint, Some(body))
            .await?;
        let created: CreatedComplaint = super::from_value(value)?;

        info!(complaint_id = created.id, title = %created.title, "Complaint filed");
        Ok(created)
    }
}
