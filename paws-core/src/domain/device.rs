//! Paired sensor devices.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::DeviceId;

/// Radio signal quality label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SignalStrength {
    Strong,
    Good,
    Weak,
    Other(String),
}

impl SignalStrength {
    pub fn as_str(&self) -> &str {
        match self {
            SignalStrength::Strong => "Strong",
            SignalStrength::Good => "Good",
            SignalStrength::Weak => "Weak",
            SignalStrength::Other(s) => s,
        }
    }
}

impl From<String> for SignalStrength {
    fn from(s: String) -> Self {
        match s.as_str() {
            "Strong" => SignalStrength::Strong,
            "Good" => SignalStrength::Good,
            "Weak" => SignalStrength::Weak,
            _ => SignalStrength::Other(s),
        }
    }
}

impl From<SignalStrength> for String {
    fn from(signal: SignalStrength) -> Self {
        signal.as_str().to_string()
    }
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sensor device attached to a plant.
///
/// `plant` is the plant's display name, not a checked reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: DeviceId,
    pub name: String,
    pub plant: String,
    /// Battery charge, percent (0-100)
    pub battery: u8,
    pub signal: SignalStrength,
}
