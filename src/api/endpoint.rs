//! Typed endpoint registry
//!
//! Every logical operation the client can perform is a variant of [`Endpoint`].
//! The offline responder matches on the same enum, so adding an operation
//! forces a decision about its offline behavior at compile time instead of
//! falling through a string-matching table at runtime.

use reqwest::Method;

use crate::models::MeterType;

/// Data sets the admin panel can export as a spreadsheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Complaints,
    Users,
    MeterReadings,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Complaints => "complaints",
            ExportKind::Users => "users",
            ExportKind::MeterReadings => "meter-readings",
        }
    }
}

/// Logical operations against the УК backend
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    Health,
    TelegramAuth,
    Login,
    UserStats,
    GetProfile,
    UpdateProfile,
    MeterTypes,
    GetReadings,
    SubmitReading(MeterType),
    ComplaintCategories,
    ListComplaints,
    CreateComplaint,
    ListNotifications,
    MarkNotificationRead(i64),
    AdminStats,
    AdminComplaints,
    UpdateComplaint(i64),
    AdminUsers,
    AdminMeterReadings,
    VerifyReading(i64),
    AdminExport(ExportKind),
    SendNotification,
    TelegramStats,
    TelegramTest,
    SupportChat,
    SupportStatus,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Health
            | Endpoint::UserStats
            | Endpoint::GetProfile
            | Endpoint::MeterTypes
            | Endpoint::GetReadings
            | Endpoint::ComplaintCategories
            | Endpoint::ListComplaints
            | Endpoint::ListNotifications
            | Endpoint::AdminStats
            | Endpoint::AdminComplaints
            | Endpoint::AdminUsers
            | Endpoint::AdminMeterReadings
            | Endpoint::AdminExport(_)
            | Endpoint::TelegramStats
            | Endpoint::SupportStatus => Method::GET,

            Endpoint::TelegramAuth
            | Endpoint::Login
            | Endpoint::SubmitReading(_)
            | Endpoint::CreateComplaint
            | Endpoint::VerifyReading(_)
            | Endpoint::SendNotification
            | Endpoint::TelegramTest
            | Endpoint::SupportChat => Method::POST,

            Endpoint::UpdateProfile
            | Endpoint::MarkNotificationRead(_)
            | Endpoint::UpdateComplaint(_) => Method::PUT,
        }
    }

    /// Path relative to the configured base URL
    pub fn path(&self) -> String {
        match self {
            Endpoint::Health => "/health".to_string(),
            Endpoint::TelegramAuth => "/auth/telegram".to_string(),
            Endpoint::Login => "/auth/login".to_string(),
            Endpoint::UserStats => "/users/stats".to_string(),
            Endpoint::GetProfile | Endpoint::UpdateProfile => "/users/profile".to_string(),
            Endpoint::MeterTypes => "/meter-types".to_string(),
            Endpoint::GetReadings => "/meters/readings".to_string(),
            Endpoint::SubmitReading(meter_type) => format!("/meters/readings/{meter_type}"),
            Endpoint::ComplaintCategories => "/complaint-categories".to_string(),
            Endpoint::ListComplaints | Endpoint::CreateComplaint => "/complaints".to_string(),
            Endpoint::ListNotifications => "/notifications".to_string(),
            Endpoint::MarkNotificationRead(id) => format!("/notifications/{id}/read"),
            Endpoint::AdminStats => "/admin/stats".to_string(),
            Endpoint::AdminComplaints => "/admin/complaints".to_string(),
            Endpoint::UpdateComplaint(id) => format!("/admin/complaints/{id}"),
            Endpoint::AdminUsers => "/admin/users".to_string(),
            Endpoint::AdminMeterReadings => "/admin/meter-readings".to_string(),
            Endpoint::VerifyReading(id) => format!("/admin/meter-readings/{id}/verify"),
            Endpoint::AdminExport(kind) => format!("/admin/export/{}", kind.as_str()),
            Endpoint::SendNotification => "/admin/notifications".to_string(),
            Endpoint::TelegramStats => "/admin/telegram/stats".to_string(),
            Endpoint::TelegramTest => "/admin/telegram/test".to_string(),
            Endpoint::SupportChat => "/gigachat/chat".to_string(),
            Endpoint::SupportStatus => "/gigachat/status".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths() {
        assert_eq!(Endpoint::Health.path(), "/health");
        assert_eq!(
            Endpoint::SubmitReading(MeterType::ColdWater).path(),
            "/meters/readings/cold_water"
        );
        assert_eq!(Endpoint::UpdateComplaint(7).path(), "/admin/complaints/7");
        assert_eq!(
            Endpoint::AdminExport(ExportKind::MeterReadings).path(),
            "/admin/export/meter-readings"
        );
        assert_eq!(Endpoint::MarkNotificationRead(3).path(), "/notifications/3/read");
    }

    #[test]
    fn test_methods() {
        assert_eq!(Endpoint::ListComplaints.method(), Method::GET);
        assert_eq!(Endpoint::CreateComplaint.method(), Method::POST);
        assert_eq!(Endpoint::UpdateProfile.method(), Method::PUT);
        assert_eq!(Endpoint::VerifyReading(1).method(), Method::POST);
    }
}
