//! Notification model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Warning,
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for POST `/admin/notifications`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRequest {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    /// "all" or "specific"
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<i64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serializes_as_type_field() {
        let n = Notification {
            id: 1,
            title: "Отключение воды".into(),
            message: "С 10:00 до 14:00".into(),
            kind: NotificationKind::Warning,
            read: false,
            created_at: Utc::now(),
        };
        let v = serde_json::to_value(&n).unwrap();
        assert_eq!(v["type"], "warning");
        assert!(v.get("kind").is_none());
    }
}
