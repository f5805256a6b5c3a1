//! Request dispatcher
//!
//! Issues HTTP calls against the configured backend base URL: JSON in, JSON
//! out, bearer token from the persisted session when one exists, one fixed
//! timeout per request. No retries here; recovery is the client's job.

use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, Response, StatusCode};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::store::LocalStore;
use crate::utils::errors::{DomovoyError, Result};
use crate::utils::logging::log_api_request;

use super::endpoint::Endpoint;

#[derive(Debug, Clone)]
pub struct Dispatcher {
    client: Client,
    base_url: String,
    store: LocalStore,
}

impl Dispatcher {
    pub fn new(config: &ApiConfig, store: LocalStore) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(DomovoyError::Http)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    /// Dispatch an operation and parse the JSON response
    pub async fn dispatch(&self, endpoint: &Endpoint, body: Option<&Value>) -> Result<Value> {
        let response = self.send(endpoint, body).await?;
        let value = Self::check_status(response).await?.json().await?;
        Ok(value)
    }

    /// Dispatch an operation and return the raw response bytes, used for
    /// spreadsheet exports
    pub async fn download(&self, endpoint: &Endpoint) -> Result<Vec<u8>> {
        let response = self.send(endpoint, None).await?;
        let bytes = Self::check_status(response).await?.bytes().await?;
        Ok(bytes.to_vec())
    }

    async fn send(&self, endpoint: &Endpoint, body: Option<&Value>) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint.path());
        let token = self.store.token();

        log_api_request(endpoint.method().as_str(), &endpoint.path(), token.is_some());

        let mut request = self
            .client
            .request(endpoint.method(), &url)
            .header(CONTENT_TYPE, "application/json");

        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send().await?)
    }

    /// Map non-2xx statuses to structured errors. The backend reports
    /// failures as `{"error": "..."}` bodies.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(DomovoyError::Unauthorized);
        }
        if !status.is_success() {
            let message = match response.json::<Value>().await {
                Ok(body) => body
                    .get("error")
                    .and_then(Value::as_str)
                    .unwrap_or("request failed")
                    .to_string(),
                Err(_) => "request failed".to_string(),
            };
            return Err(DomovoyError::Server {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}
