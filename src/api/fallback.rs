//! Offline fallback responder
//!
//! When the backend is unreachable a fixed subset of operations is served
//! from the local store, shaped exactly like the real backend's JSON so
//! callers cannot tell the difference. Operations that must not be emulated
//! reject with [`DomovoyError::FallbackUnavailable`]:
//!
//! - authentication: a failed login must never fabricate a session,
//! - spreadsheet export and the Telegram proxy: server-side effects,
//! - the support chat: an external AI service.

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::debug;

use crate::models::{
    ComplaintUpdate, MeterType, NewComplaint, NewReading, NotificationRequest,
    UpdateProfileRequest,
};
use crate::store::LocalStore;
use crate::utils::errors::{DomovoyError, Result};

use super::endpoint::Endpoint;

/// Serve `endpoint` from the local store
pub fn respond(endpoint: &Endpoint, body: Option<&Value>, store: &LocalStore) -> Result<Value> {
    debug!(endpoint = ?endpoint, "Offline responder handling request");

    match endpoint {
        Endpoint::Health => Ok(json!({
            "status": "ok",
            "message": "Offline store is serving requests"
        })),

        Endpoint::UserStats => Ok(store.read(|data| {
            json!({
                "metersCount": data.readings_count(),
                "complaintsCount": data.complaints.len(),
                "activeComplaints": data.active_complaints_count(),
                "lastReading": data.last_reading().map(|r| json!({
                    "meter_type": r.meter_type,
                    "value": r.value,
                    "date": r.created_at,
                })),
            })
        })),

        Endpoint::GetProfile => {
            let user = store
                .session_user()
                .ok_or_else(|| DomovoyError::NotFound("no profile in offline store".into()))?;
            Ok(json!({ "success": true, "user": user }))
        }

        Endpoint::UpdateProfile => {
            let update: UpdateProfileRequest = parse_body(body)?;
            let mut user = store
                .session_user()
                .ok_or_else(|| DomovoyError::NotFound("no profile in offline store".into()))?;

            if update.first_name.is_some() {
                user.first_name = update.first_name;
            }
            if update.last_name.is_some() {
                user.last_name = update.last_name;
            }
            if update.apartment.is_some() {
                user.apartment = update.apartment;
            }
            if update.building.is_some() {
                user.building = update.building;
            }
            if update.street.is_some() {
                user.street = update.street;
            }
            if update.phone.is_some() {
                user.phone = update.phone;
            }
            if update.email.is_some() {
                user.email = update.email;
            }

            let token = store.token().unwrap_or_default();
            store.set_session(token, user.clone())?;
            store.update(|data| {
                data.upsert_user(user.clone());
            })?;
            Ok(json!({ "success": true, "user": user }))
        }

        Endpoint::MeterTypes => {
            let types: Vec<Value> = MeterType::all()
                .iter()
                .map(|t| {
                    json!({
                        "id": t,
                        "name": t.display_name(),
                        "unit": t.unit(),
                    })
                })
                .collect();
            Ok(Value::Array(types))
        }

        Endpoint::GetReadings => {
            Ok(store.read(|data| json!(data.readings)))
        }

        Endpoint::SubmitReading(meter_type) => {
            let new: NewReading = parse_body(body)
                .map_err(|_| DomovoyError::InvalidInput("Value is required".into()))?;
            let reading = store.update(|data| data.append_reading(*meter_type, new))?;
            Ok(json!({
                "id": reading.id,
                "value": reading.value,
                "previous_value": reading.previous_value,
                "consumption": reading.consumption,
                "created_at": reading.created_at,
            }))
        }

        Endpoint::ComplaintCategories => Ok(json!([
            { "id": "plumbing", "name": "Сантехника" },
            { "id": "electrics", "name": "Электрика" },
            { "id": "elevator", "name": "Лифт" },
            { "id": "heating", "name": "Отопление" },
            { "id": "cleaning", "name": "Уборка" },
            { "id": "other", "name": "Другое" },
        ])),

        Endpoint::ListComplaints => {
            Ok(store.read(|data| json!({ "complaints": data.complaints })))
        }

        Endpoint::CreateComplaint => {
            let new: NewComplaint = parse_body(body)?;
            let complaint = store.update(|data| data.append_complaint(new))?;
            Ok(json!({
                "id": complaint.id,
                "title": complaint.title,
                "status": complaint.status,
                "created_at": complaint.created_at,
            }))
        }

        Endpoint::ListNotifications => Ok(store.read(|data| {
            json!({ "success": true, "notifications": data.notifications })
        })),

        Endpoint::MarkNotificationRead(id) => {
            let found = store.update(|data| data.mark_notification_read(*id))?;
            if !found {
                return Err(DomovoyError::NotFound(format!("notification {id}")));
            }
            Ok(json!({ "success": true }))
        }

        Endpoint::AdminStats => Ok(store.read(|data| {
            json!({
                "totalUsers": data.users.len(),
                "totalComplaints": data.complaints.len(),
                "totalReadings": data.readings_count(),
                "activeComplaints": data.active_complaints_count(),
            })
        })),

        Endpoint::AdminComplaints => {
            let session_user = store.session_user();
            Ok(store.read(|data| {
                let complaints: Vec<Value> = data
                    .complaints
                    .iter()
                    .map(|c| {
                        let mut v = json!(c);
                        if let Some(user) = &session_user {
                            v["user_name"] = json!(format!(
                                "{} {}",
                                user.first_name.as_deref().unwrap_or(""),
                                user.last_name.as_deref().unwrap_or("")
                            ));
                            v["address"] = json!(address_line(user));
                        }
                        v
                    })
                    .collect();
                json!({ "complaints": complaints })
            }))
        }

        Endpoint::UpdateComplaint(id) => {
            let update: ComplaintUpdate = parse_body(body)?;
            let updated = store.update(|data| data.update_complaint(*id, update).cloned())?;
            match updated {
                Some(complaint) => Ok(json!({
                    "id": complaint.id,
                    "status": complaint.status,
                    "updated_at": complaint.updated_at,
                })),
                None => Err(DomovoyError::NotFound(format!("complaint {id}"))),
            }
        }

        Endpoint::AdminUsers => Ok(store.read(|data| {
            let users: Vec<Value> = data
                .users
                .iter()
                .map(|u| {
                    let mut v = json!(u);
                    v["address"] = json!(address_line(u));
                    v["readings_count"] = json!(data.readings_count());
                    v["complaints_count"] = json!(data.complaints.len());
                    v
                })
                .collect();
            json!({ "users": users })
        })),

        Endpoint::AdminMeterReadings => Ok(store.read(|data| {
            let mut readings: Vec<_> = data.readings.values().flatten().collect();
            readings.sort_by_key(|r| r.created_at);
            json!({ "readings": readings })
        })),

        Endpoint::VerifyReading(id) => {
            let reading = store.update(|data| data.verify_reading(*id).cloned())?;
            match reading {
                Some(reading) => Ok(json!({ "success": true, "reading": reading })),
                None => Err(DomovoyError::NotFound(format!("meter reading {id}"))),
            }
        }

        Endpoint::SendNotification => {
            let request: NotificationRequest = parse_body(body)?;
            store.update(|data| {
                data.append_notification(request.title, request.message, request.kind);
            })?;
            Ok(json!({
                "success": true,
                "message": "Уведомление сохранено офлайн",
            }))
        }

        // Never emulated offline.
        Endpoint::TelegramAuth
        | Endpoint::Login
        | Endpoint::AdminExport(_)
        | Endpoint::TelegramStats
        | Endpoint::TelegramTest
        | Endpoint::SupportChat
        | Endpoint::SupportStatus => Err(DomovoyError::FallbackUnavailable {
            method: endpoint.method().to_string(),
            path: endpoint.path(),
        }),
    }
}

fn parse_body<T: DeserializeOwned>(body: Option<&Value>) -> Result<T> {
    let body = body
        .ok_or_else(|| DomovoyError::InvalidInput("request body is required".into()))?;
    serde_json::from_value(body.clone())
        .map_err(|e| DomovoyError::InvalidInput(format!("invalid request body: {e}")))
}

fn address_line(user: &crate::models::User) -> String {
    let street = user.street.as_deref().unwrap_or("—");
    let building = user.building.as_deref().unwrap_or("—");
    let apartment = user.apartment.as_deref().unwrap_or("—");
    format!("{street}, д. {building}, кв. {apartment}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComplaintStatus;
    use serde_json::json;

    fn empty_store() -> (tempfile::TempDir, LocalStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalStore::open(dir.path().join("store.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_create_complaint_assigns_new_status_and_sequential_id() {
        let (_dir, store) = empty_store();
        let body = json!({
            "title": "Leak",
            "description": "Under the sink",
            "category": "plumbing",
            "priority": "high",
        });

        let response = respond(&Endpoint::CreateComplaint, Some(&body), &store).unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["status"], "new");

        // visible in a subsequent list call
        let listed = respond(&Endpoint::ListComplaints, None, &store).unwrap();
        assert_eq!(listed["complaints"].as_array().unwrap().len(), 1);
        assert_eq!(listed["complaints"][0]["title"], "Leak");
    }

    #[test]
    fn test_submit_reading_derives_consumption() {
        let (_dir, store) = empty_store();
        let first = respond(
            &Endpoint::SubmitReading(MeterType::Electricity),
            Some(&json!({ "value": 1234.5 })),
            &store,
        )
        .unwrap();
        assert_eq!(first["consumption"], Value::Null);

        let second = respond(
            &Endpoint::SubmitReading(MeterType::Electricity),
            Some(&json!({ "value": 1300.0 })),
            &store,
        )
        .unwrap();
        assert_eq!(second["previous_value"], 1234.5);
        assert_eq!(second["consumption"], 65.5);
    }

    #[test]
    fn test_submit_reading_without_value_is_rejected() {
        let (_dir, store) = empty_store();
        let err = respond(
            &Endpoint::SubmitReading(MeterType::Gas),
            Some(&json!({ "notes": "no value" })),
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, DomovoyError::InvalidInput(_)));
    }

    #[test]
    fn test_auth_is_never_served_offline() {
        let (_dir, store) = empty_store();
        let err = respond(
            &Endpoint::TelegramAuth,
            Some(&json!({ "telegram_id": "1" })),
            &store,
        )
        .unwrap_err();
        assert!(matches!(err, DomovoyError::FallbackUnavailable { .. }));
        assert!(store.token().is_none());
    }

    #[test]
    fn test_export_and_support_chat_reject() {
        let (_dir, store) = empty_store();
        for endpoint in [
            Endpoint::AdminExport(super::super::endpoint::ExportKind::Users),
            Endpoint::SupportChat,
            Endpoint::TelegramTest,
        ] {
            let err = respond(&endpoint, None, &store).unwrap_err();
            assert!(matches!(err, DomovoyError::FallbackUnavailable { .. }));
        }
    }

    #[test]
    fn test_update_complaint_status_in_place() {
        let (_dir, store) = empty_store();
        respond(
            &Endpoint::CreateComplaint,
            Some(&json!({
                "title": "Лифт",
                "description": "Не работает",
                "category": "elevator",
            })),
            &store,
        )
        .unwrap();

        let response = respond(
            &Endpoint::UpdateComplaint(1),
            Some(&json!({ "status": "in_progress", "response": "Мастер выехал" })),
            &store,
        )
        .unwrap();
        assert_eq!(response["id"], 1);
        assert_eq!(response["status"], "in_progress");
        assert_eq!(
            store.read(|d| d.complaints[0].status),
            ComplaintStatus::InProgress
        );

        let missing = respond(
            &Endpoint::UpdateComplaint(99),
            Some(&json!({ "status": "closed" })),
            &store,
        )
        .unwrap_err();
        assert!(matches!(missing, DomovoyError::NotFound(_)));
    }

    #[test]
    fn test_user_stats_counts() {
        let (_dir, store) = empty_store();
        respond(
            &Endpoint::SubmitReading(MeterType::HotWater),
            Some(&json!({ "value": 10.0 })),
            &store,
        )
        .unwrap();
        respond(
            &Endpoint::CreateComplaint,
            Some(&json!({ "title": "t", "description": "d", "category": "other" })),
            &store,
        )
        .unwrap();

        let stats = respond(&Endpoint::UserStats, None, &store).unwrap();
        assert_eq!(stats["metersCount"], 1);
        assert_eq!(stats["complaintsCount"], 1);
        assert_eq!(stats["activeComplaints"], 1);
        assert_eq!(stats["lastReading"]["value"], 10.0);
    }

    #[test]
    fn test_meter_types_catalog() {
        let (_dir, store) = empty_store();
        let catalog = respond(&Endpoint::MeterTypes, None, &store).unwrap();
        let entries = catalog.as_array().unwrap();
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().any(|e| e["id"] == "cold_water"));
    }
}
