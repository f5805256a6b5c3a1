//! Meter readings service

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{ApiClient, Endpoint};
use crate::models::{MeterReading, MeterType, MeterTypeInfo, NewReading};
use crate::utils::errors::{DomovoyError, Result};

/// Backend response for a submitted reading
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmittedReading {
    pub id: i64,
    pub value: f64,
    pub previous_value: Option<f64>,
    pub consumption: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MeterService {
    client: ApiClient,
}

impl MeterService {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Catalog of meter kinds with display names and units
    pub async fn meter_types(&self) -> Result<Vec<MeterTypeInfo>> {
        let value = self.client.execute(Endpoint::MeterTypes, None).await?;
        super::from_value(value)
    }

    /// Reading history grouped by meter type
    pub async fn readings(&self) -> Result<HashMap<MeterType, Vec<MeterReading>>> {
        let value = self.client.execute(Endpoint::GetReadings, None).await?;
        super::from_value(value)
    }

    /// Submit one reading. Consumption is derived server-side (or store-side
    /// when offline) from the previous reading of the same type.
    pub async fn submit_reading(
        &self,
        meter_type: MeterType,
        value: f64,
        notes: Option<String>,
    ) -> Result<SubmittedReading> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomovoyError::InvalidInput(format!(
                "reading value must be a non-negative number, got {value}"
            )));
        }

        let body = serde_json::to_value(NewReading { value, notes })?;
        let response = self
            .client
            .execute(Endpoint::SubmitReading(meter_type), Some(body))
            .await?;
        let submitted: SubmittedReading = super::from_value(response)?;

        info!(
            meter_type = %meter_type,
            value = value,
            consumption = submitted.consumption,
            "Meter reading submitted"
        );
        Ok(submitted)
    }
}
