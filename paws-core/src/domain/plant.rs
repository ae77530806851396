//! Monitored plants and their health status.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::PlantId;

/// Health status reported for a plant.
///
/// Stored independently of moisture: a dry plant may still report `Good`.
/// Labels outside the known three are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlantStatus {
    Good,
    Warning,
    Error,
    Other(String),
}

impl PlantStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PlantStatus::Good => "good",
            PlantStatus::Warning => "warning",
            PlantStatus::Error => "error",
            PlantStatus::Other(s) => s,
        }
    }

    pub fn is_good(&self) -> bool {
        matches!(self, PlantStatus::Good)
    }
}

impl From<String> for PlantStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "good" => PlantStatus::Good,
            "warning" => PlantStatus::Warning,
            "error" => PlantStatus::Error,
            _ => PlantStatus::Other(s),
        }
    }
}

impl From<&str> for PlantStatus {
    fn from(s: &str) -> Self {
        PlantStatus::from(s.to_string())
    }
}

impl From<PlantStatus> for String {
    fn from(status: PlantStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for PlantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitored plant with its latest sensor snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub id: PlantId,
    pub name: String,
    pub scientific_name: String,
    /// Soil moisture, percent (0-100)
    pub moisture: u8,
    /// Air temperature, degrees Celsius
    pub temperature: i16,
    /// Relative humidity, percent (0-100)
    pub humidity: u8,
    /// Light level label ("Low", "Good", "Bright", ...)
    pub light: String,
    /// Pre-formatted display string, e.g. "2h ago"
    pub last_watered: String,
    pub status: PlantStatus,
    /// Glyph shown in place of a photo
    pub image: String,
}
