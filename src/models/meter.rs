//! Meter reading model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Utility meter kinds tracked by the УК
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeterType {
    Electricity,
    ColdWater,
    HotWater,
    Gas,
    Heating,
}

impl MeterType {
    pub fn all() -> [MeterType; 5] {
        [
            MeterType::Electricity,
            MeterType::ColdWater,
            MeterType::HotWater,
            MeterType::Gas,
            MeterType::Heating,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeterType::Electricity => "electricity",
            MeterType::ColdWater => "cold_water",
            MeterType::HotWater => "hot_water",
            MeterType::Gas => "gas",
            MeterType::Heating => "heating",
        }
    }

    /// Human-readable name shown in the Mini App
    pub fn display_name(&self) -> &'static str {
        match self {
            MeterType::Electricity => "Электричество",
            MeterType::ColdWater => "Холодная вода",
            MeterType::HotWater => "Горячая вода",
            MeterType::Gas => "Газ",
            MeterType::Heating => "Отопление",
        }
    }

    /// Measurement unit shown next to the value
    pub fn unit(&self) -> &'static str {
        match self {
            MeterType::Electricity => "кВт·ч",
            MeterType::Gas => "м³",
            MeterType::Heating => "Гкал",
            MeterType::ColdWater | MeterType::HotWater => "м³",
        }
    }
}

impl std::fmt::Display for MeterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MeterType {
    type Err = crate::DomovoyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "electricity" => Ok(MeterType::Electricity),
            "cold_water" => Ok(MeterType::ColdWater),
            "hot_water" => Ok(MeterType::HotWater),
            "gas" => Ok(MeterType::Gas),
            "heating" => Ok(MeterType::Heating),
            other => Err(crate::DomovoyError::InvalidInput(format!(
                "Unknown meter type: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterReading {
    pub id: i64,
    pub meter_type: MeterType,
    pub value: f64,
    pub previous_value: Option<f64>,
    /// Derived at write time: value − previous_value of the same meter type.
    /// May be negative; the backend accepts it silently.
    pub consumption: Option<f64>,
    pub notes: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Payload for POST `/meters/readings/:type`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewReading {
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Catalog entry returned by `/meter-types`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterTypeInfo {
    pub id: MeterType,
    pub name: String,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meter_type_wire_format() {
        let json = serde_json::to_string(&MeterType::ColdWater).unwrap();
        assert_eq!(json, "\"cold_water\"");
        let back: MeterType = serde_json::from_str("\"heating\"").unwrap();
        assert_eq!(back, MeterType::Heating);
    }

    #[test]
    fn test_meter_type_parse() {
        assert_eq!("gas".parse::<MeterType>().unwrap(), MeterType::Gas);
        assert!("water".parse::<MeterType>().is_err());
    }
}
