//! Shared test fixtures
//!
//! Builds a client wired to an arbitrary base URL with a temp-dir-backed
//! local store, plus factories for test entities.

use chrono::Utc;

use domovoy::{
    api::ApiClient,
    config::Settings,
    events::EventBus,
    models::User,
    store::LocalStore,
};

pub struct TestApp {
    pub client: ApiClient,
    pub store: LocalStore,
    pub events: EventBus,
    pub settings: Settings,
    _dir: tempfile::TempDir,
}

/// Build a client against `base_url` (without the `/api` suffix)
pub fn test_app(base_url: &str) -> TestApp {
    let dir = tempfile::tempdir().expect("temp dir");

    let mut settings = Settings::default();
    settings.api.base_url = format!("{base_url}/api");
    settings.api.timeout_seconds = 2;
    settings.storage.path = dir
        .path()
        .join("store.json")
        .to_string_lossy()
        .into_owned();

    let store = LocalStore::open(&settings.storage.path).expect("open store");
    let events = EventBus::new();
    let client = ApiClient::new(&settings, store.clone(), events.clone()).expect("client");

    TestApp {
        client,
        store,
        events,
        settings,
        _dir: dir,
    }
}

/// A base URL nothing listens on, for simulating network failures
pub fn unreachable_base() -> &'static str {
    "http://127.0.0.1:9"
}

pub fn test_user() -> User {
    User {
        id: 1,
        telegram_id: "123456789".into(),
        first_name: Some("Иван".into()),
        last_name: Some("Иванов".into()),
        username: Some("ivan_ivanov".into()),
        apartment: Some("5".into()),
        building: Some("1".into()),
        street: Some("ул. Ленина".into()),
        phone: Some("+7 900 123 45 67".into()),
        email: Some("ivan@example.com".into()),
        is_admin: false,
        is_active: true,
        created_at: Utc::now(),
    }
}
