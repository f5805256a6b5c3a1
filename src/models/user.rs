//! User model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub telegram_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub apartment: Option<String>,
    pub building: Option<String>,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub is_admin: bool,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for `/auth/telegram`, built from the Telegram-supplied init data
/// plus the registration form fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramAuthRequest {
    pub telegram_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub apartment: Option<String>,
    pub building: Option<String>,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Payload for `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Payload for PUT `/users/profile`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub apartment: Option<String>,
    pub building: Option<String>,
    pub street: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Response of both auth endpoints: `{success, user, token}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub user: User,
    pub token: String,
}

/// Response of `/users/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub meters_count: u64,
    pub complaints_count: u64,
    pub active_complaints: u64,
    pub last_reading: Option<LastReading>,
}

/// Most recent reading summary embedded in `/users/stats`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LastReading {
    pub meter_type: crate::models::MeterType,
    pub value: f64,
    pub date: DateTime<Utc>,
}
