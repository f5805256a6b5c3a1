//! Complaint model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Complaint lifecycle: new → in_progress → resolved|rejected → closed.
/// The admin panel may set any status from any other status; the enum only
/// constrains the set of legal values, not the transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    New,
    InProgress,
    Resolved,
    Rejected,
    Closed,
}

impl ComplaintStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, ComplaintStatus::New | ComplaintStatus::InProgress)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub priority: Priority,
    pub status: ComplaintStatus,
    pub response: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for POST `/complaints`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComplaint {
    pub title: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub priority: Priority,
}

/// Payload for PUT `/admin/complaints/:id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintUpdate {
    pub status: ComplaintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
}

/// Catalog entry returned by `/complaint-categories`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplaintCategory {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ComplaintStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
    }

    #[test]
    fn test_active_statuses() {
        assert!(ComplaintStatus::New.is_active());
        assert!(ComplaintStatus::InProgress.is_active());
        assert!(!ComplaintStatus::Closed.is_active());
    }

    #[test]
    fn test_new_complaint_default_priority() {
        let c: NewComplaint = serde_json::from_str(
            r#"{"title":"Leak","description":"...","category":"plumbing"}"#,
        )
        .unwrap();
        assert_eq!(c.priority, Priority::Medium);
    }
}
