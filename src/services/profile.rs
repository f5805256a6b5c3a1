//! Profile service

use crate::api::{ApiClient, Endpoint};
use crate::models::{UpdateProfileRequest, User, UserStats};
use crate::utils::errors::{DomovoyError, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone};

#[derive(Debug, Clone)]
pub struct ProfileService {
    client: ApiClient,
}

impl ProfileService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Home-screen counters: readings, complaints, last reading
    pub async fn stats(&self) -> Result<UserStats> {
        let value = self.client.execute(Endpoint::UserStats, None).await?;
        super::from_value(value)
    }

    pub async fn profile(&self) -> Result<User> {
        let value = self.client.execute(Endpoint::GetProfile, None).await?;
        super::extract(value, "user")
    }

    /// Update profile fields. Contact formats are checked client-side before
    /// anything is dispatched, the way the profile form did.
    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<User> {
        if let Some(email) = request.email.as_deref() {
            if !is_valid_email(email) {
                return Err(DomovoyError::InvalidInput(format!("invalid email: {email}")));
            }
        }
        if let Some(phone) = request.phone.as_deref() {
            if !is_valid_phone(phone) {
                return Err(DomovoyError::InvalidInput(format!("invalid phone: {phone}")));
            }
        }

        let value = self
            .client
            .execute(Endpoint::UpdateProfile, Some(serde_json::to_value(&request)?))
            .await?;
        super::extract(value, "user")
    }
}
