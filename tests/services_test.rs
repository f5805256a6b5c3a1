//! Integration tests for the typed service layer against a mocked backend.

mod helpers;

use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use domovoy::models::{
    ComplaintStatus, ComplaintUpdate, LoginRequest, MeterType, NewComplaint, Priority,
    TelegramAuthRequest, UpdateProfileRequest,
};
use domovoy::services::ServiceFactory;
use domovoy::DomovoyError;

use helpers::{test_app, test_user, unreachable_base};

fn factory(app: &helpers::TestApp) -> ServiceFactory {
    ServiceFactory::new(app.client.clone(), app.store.clone(), &app.settings)
}

fn auth_body() -> serde_json::Value {
    json!({
        "success": true,
        "user": test_user(),
        "token": "tok-777",
    })
}

#[tokio::test]
async fn telegram_auth_persists_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/telegram"))
        .and(body_partial_json(json!({ "telegram_id": "123456789" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(auth_body()))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);

    let auth = services
        .auth
        .authenticate_telegram(TelegramAuthRequest {
            telegram_id: "123456789".into(),
            first_name: Some("Иван".into()),
            last_name: Some("Иванов".into()),
            username: Some("ivan_ivanov".into()),
            apartment: None,
            building: None,
            street: None,
            phone: None,
            email: None,
        })
        .await
        .unwrap();

    assert!(auth.success);
    assert_eq!(app.store.token().as_deref(), Some("tok-777"));
    assert!(services.auth.is_authenticated());
    assert_eq!(
        services.auth.current_user().map(|u| u.telegram_id),
        Some("123456789".to_string())
    );
}

#[tokio::test]
async fn login_with_empty_credentials_is_rejected_client_side() {
    let app = test_app(unreachable_base());
    let services = factory(&app);

    let err = services
        .auth
        .login(LoginRequest { username: "".into(), password: "pw".into() })
        .await
        .unwrap_err();
    assert_matches!(err, DomovoyError::InvalidInput(_));
}

#[tokio::test]
async fn logout_clears_the_session() {
    let app = test_app(unreachable_base());
    app.store.set_session("tok".into(), test_user()).unwrap();

    let services = factory(&app);
    services.auth.logout().unwrap();
    assert!(!services.auth.is_authenticated());
}

#[tokio::test]
async fn profile_update_validates_contacts_before_dispatch() {
    // no server at all: validation must fail before any request is made
    let app = test_app(unreachable_base());
    let services = factory(&app);

    let err = services
        .profile
        .update_profile(UpdateProfileRequest {
            email: Some("not-an-email".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_matches!(err, DomovoyError::InvalidInput(_));

    let err = services
        .profile
        .update_profile(UpdateProfileRequest {
            phone: Some("12-34".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert_matches!(err, DomovoyError::InvalidInput(_));
}

#[tokio::test]
async fn complaint_create_parses_backend_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/complaints"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "title": "Лифт",
            "status": "new",
            "created_at": "2024-08-04T21:30:00Z",
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);

    let created = services
        .complaints
        .create(NewComplaint {
            title: "Лифт".into(),
            description: "Не реагирует на кнопки".into(),
            category: "elevator".into(),
            priority: Priority::Urgent,
        })
        .await
        .unwrap();

    assert_eq!(created.id, 12);
    assert_eq!(created.status, ComplaintStatus::New);
}

#[tokio::test]
async fn complaint_create_requires_title() {
    let app = test_app(unreachable_base());
    let services = factory(&app);

    let err = services
        .complaints
        .create(NewComplaint {
            title: "  ".into(),
            description: "d".into(),
            category: "other".into(),
            priority: Priority::default(),
        })
        .await
        .unwrap_err();
    assert_matches!(err, DomovoyError::InvalidInput(_));
}

#[tokio::test]
async fn meter_submit_rejects_negative_values_client_side() {
    let app = test_app(unreachable_base());
    let services = factory(&app);

    let err = services
        .meters
        .submit_reading(MeterType::Gas, -5.0, None)
        .await
        .unwrap_err();
    assert_matches!(err, DomovoyError::InvalidInput(_));
}

#[tokio::test]
async fn meter_submit_parses_consumption() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/meters/readings/electricity"))
        .and(body_partial_json(json!({ "value": 1300.0 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "value": 1300.0,
            "previous_value": 1234.5,
            "consumption": 65.5,
            "created_at": "2024-08-04T21:30:00Z",
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);

    let submitted = services
        .meters
        .submit_reading(MeterType::Electricity, 1300.0, None)
        .await
        .unwrap();
    assert_eq!(submitted.consumption, Some(65.5));
}

#[tokio::test]
async fn admin_stats_parse_camel_case_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "totalUsers": 150,
            "totalComplaints": 12,
            "totalReadings": 340,
            "activeComplaints": 4,
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);
    let admin = services.admin.expect("admin panel enabled by default");

    let stats = admin.stats().await.unwrap();
    assert_eq!(stats.total_users, 150);
    assert_eq!(stats.active_complaints, 4);
}

#[tokio::test]
async fn admin_complaint_update_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/complaints/7"))
        .and(body_partial_json(json!({ "status": "resolved" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "status": "resolved",
            "updated_at": "2024-08-05T10:00:00Z",
        })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);
    let admin = services.admin.expect("admin panel enabled by default");

    let updated = admin
        .update_complaint(
            7,
            ComplaintUpdate {
                status: ComplaintStatus::Resolved,
                response: Some("Устранено".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status, ComplaintStatus::Resolved);
}

#[tokio::test]
async fn feature_flags_gate_admin_and_support() {
    let mut app = test_app(unreachable_base());
    app.settings.features.admin_panel = false;
    app.settings.features.support_chat = false;

    let services = ServiceFactory::new(app.client.clone(), app.store.clone(), &app.settings);
    assert!(services.admin.is_none());
    assert!(services.support.is_none());
}

#[tokio::test]
async fn support_chat_returns_reply_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/gigachat/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "response": "Передал вашу заявку диспетчеру.",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gigachat/status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "connected" })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);
    let support = services.support.expect("support chat enabled by default");

    assert!(support.status().await.unwrap());
    let reply = support.send("Когда починят лифт?", &[]).await.unwrap();
    assert_eq!(reply, "Передал вашу заявку диспетчеру.");
}

#[tokio::test]
async fn notifications_list_and_mark_read() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notifications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "notifications": [{
                "id": 1,
                "title": "Отключение воды",
                "message": "С 10:00 до 14:00",
                "type": "warning",
                "read": false,
                "created_at": "2024-08-04T21:30:00Z",
            }],
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/api/notifications/1/read"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let app = test_app(&server.uri());
    let services = factory(&app);

    let notifications = services.notifications.list().await.unwrap();
    assert_eq!(notifications.len(), 1);
    assert!(!notifications[0].read);

    services.notifications.mark_read(1).await.unwrap();
}
