//! Authentication service
//!
//! One canonical flow: credentials go to the backend, a verified
//! `{success, user, token}` response becomes the persisted session. A failed
//! authentication never fabricates a session; the auth endpoints have no
//! offline handlers.

use tracing::info;

use crate::api::{ApiClient, Endpoint};
use crate::models::{AuthResponse, LoginRequest, TelegramAuthRequest, User};
use crate::store::LocalStore;
use crate::utils::errors::Result;
use crate::utils::helpers::require_field;

#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
    store: LocalStore,
}

impl AuthService {
    pub fn new(client: ApiClient, store: LocalStore) -> Self {
        Self { client, store }
    }

    /// Authenticate with Telegram-supplied user data plus registration fields
    pub async fn authenticate_telegram(&self, request: TelegramAuthRequest) -> Result<AuthResponse> {
        require_field(&request.telegram_id, "telegram_id")?;

        let value = self
            .client
            .execute(Endpoint::TelegramAuth, Some(serde_json::to_value(&request)?))
            .await?;
        let auth: AuthResponse = super::from_value(value)?;

        self.store
            .set_session(auth.token.clone(), auth.user.clone())?;
        info!(user_id = auth.user.id, "Telegram authentication succeeded");
        Ok(auth)
    }

    /// Authenticate with username and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse> {
        require_field(&request.username, "username")?;
        require_field(&request.password, "password")?;

        let value = self
            .client
            .execute(Endpoint::Login, Some(serde_json::to_value(&request)?))
            .await?;
        let auth: AuthResponse = super::from_value(value)?;

        self.store
            .set_session(auth.token.clone(), auth.user.clone())?;
        info!(user_id = auth.user.id, "Login succeeded");
        Ok(auth)
    }

    /// Drop the persisted session
    pub fn logout(&self) -> Result<()> {
        self.store.clear_session()
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.session_user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.token().is_some()
    }
}
