//! Entity catalog: the read-only plant, device, notification and library
//! collections supplied to the shell at startup.
//!
//! The built-in catalog holds the demo data. A catalog can also be described
//! in TOML:
//!
//! ```toml
//! [[plants]]
//! id = 1
//! name = "Fiddle Leaf Fig"
//! scientific_name = "Ficus lyrata"
//! moisture = 75
//! temperature = 22
//! humidity = 65
//! light = "Good"
//! last_watered = "2h ago"
//! status = "good"
//! image = "🌿"
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{
    Device, DeviceId, Difficulty, EntryId, LibraryEntry, Notification, NotificationId,
    NotificationKind, Plant, PlantId, PlantStatus, SignalStrength,
};

/// Errors from loading a catalog description.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate plant id {0}")]
    DuplicatePlantId(PlantId),
    #[error("{entity} {id}: {field} = {value} exceeds 100")]
    OutOfRange {
        entity: &'static str,
        id: u32,
        field: &'static str,
        value: u8,
    },
}

/// Read-only collections of every entity the shell displays.
///
/// Deserialization goes through [`RawCatalog`], so every serde entry point
/// validates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCatalog")]
pub struct Catalog {
    plants: Vec<Plant>,
    devices: Vec<Device>,
    notifications: Vec<Notification>,
    library: Vec<LibraryEntry>,
}

/// Catalog layout as written on disk, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawCatalog {
    plants: Vec<Plant>,
    devices: Vec<Device>,
    notifications: Vec<Notification>,
    library: Vec<LibraryEntry>,
}

impl TryFrom<RawCatalog> for Catalog {
    type Error = CatalogError;

    fn try_from(raw: RawCatalog) -> Result<Self, Self::Error> {
        Catalog::new(raw.plants, raw.devices, raw.notifications, raw.library)
    }
}

/// Dashboard quick-stat counts.
///
/// `healthy` counts plants whose status is exactly `good`; every other
/// status, unrecognized ones included, counts as needing care.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub total: usize,
    pub healthy: usize,
    pub needs_care: usize,
}

impl Catalog {
    /// Build a catalog from explicit collections, checking plant invariants.
    pub fn new(
        plants: Vec<Plant>,
        devices: Vec<Device>,
        notifications: Vec<Notification>,
        library: Vec<LibraryEntry>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            plants,
            devices,
            notifications,
            library,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            plants = catalog.plants.len(),
            devices = catalog.devices.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a catalog from a TOML string. Missing collections are empty.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = toml::from_str(content)?;
        Catalog::try_from(raw)
    }

    /// Serialize to the TOML layout accepted by [`Catalog::from_toml`].
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for plant in &self.plants {
            if !seen.insert(plant.id) {
                return Err(CatalogError::DuplicatePlantId(plant.id));
            }
            check_percent("plant", plant.id.0, "moisture", plant.moisture)?;
            check_percent("plant", plant.id.0, "humidity", plant.humidity)?;
        }
        for device in &self.devices {
            check_percent("device", device.id.0, "battery", device.battery)?;
        }
        Ok(())
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn library(&self) -> &[LibraryEntry] {
        &self.library
    }

    pub fn plant(&self, id: PlantId) -> Option<&Plant> {
        self.plants.iter().find(|p| p.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn quick_stats(&self) -> QuickStats {
        let healthy = self.plants.iter().filter(|p| p.status.is_good()).count();
        QuickStats {
            total: self.plants.len(),
            healthy,
            needs_care: self.plants.len() - healthy,
        }
    }

    /// The demo catalog: four plants, three devices, three notifications,
    /// six library entries.
    pub fn builtin() -> Self {
        let plants = vec![
            plant(1, "Fiddle Leaf Fig", "Ficus lyrata", 75, 22, 65, "Good", "2h ago", "good", "🌿"),
            plant(2, "Snake Plant", "Sansevieria trifasciata", 45, 20, 55, "Low", "4h ago", "warning", "🌱"),
            plant(3, "Monstera", "Monstera deliciosa", 85, 24, 70, "Bright", "1h ago", "good", "🍃"),
            plant(4, "Bird of Paradise", "Strelitzia reginae", 30, 26, 60, "Bright", "6h ago", "error", "🌺"),
        ];

        let devices = vec![
            device(1, "P.A.W.S Device #001", "Fiddle Leaf Fig", 85, SignalStrength::Strong),
            device(2, "P.A.W.S Device #002", "Snake Plant", 92, SignalStrength::Good),
            device(3, "P.A.W.S Device #003", "Monstera", 67, SignalStrength::Weak),
        ];

        let notifications = vec![
            notification(
                1,
                NotificationKind::Warning,
                "Low Moisture Alert",
                "Bird of Paradise needs watering",
                "5 min ago",
                false,
            ),
            notification(
                2,
                NotificationKind::Success,
                "Watering Complete",
                "Monstera has been watered successfully",
                "1h ago",
                false,
            ),
            notification(
                3,
                NotificationKind::Info,
                "Device Connected",
                "New P.A.W.S device registered",
                "2h ago",
                true,
            ),
        ];

        let library = vec![
            entry(1, "Fiddle Leaf Fig", Difficulty::Medium, "🌿"),
            entry(2, "Snake Plant", Difficulty::Easy, "🌱"),
            entry(3, "Monstera", Difficulty::Easy, "🍃"),
            entry(4, "Bird of Paradise", Difficulty::Hard, "🌺"),
            entry(5, "Peace Lily", Difficulty::Easy, "🌸"),
            entry(6, "Rubber Plant", Difficulty::Medium, "🌳"),
        ];

        Self {
            plants,
            devices,
            notifications,
            library,
        }
    }
}

fn check_percent(
    entity: &'static str,
    id: u32,
    field: &'static str,
    value: u8,
) -> Result<(), CatalogError> {
    if value > 100 {
        return Err(CatalogError::OutOfRange {
            entity,
            id,
            field,
            value,
        });
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn plant(
    id: u32,
    name: &str,
    scientific_name: &str,
    moisture: u8,
    temperature: i16,
    humidity: u8,
    light: &str,
    last_watered: &str,
    status: &str,
    image: &str,
) -> Plant {
    Plant {
        id: PlantId(id),
        name: name.into(),
        scientific_name: scientific_name.into(),
        moisture,
        temperature,
        humidity,
        light: light.into(),
        last_watered: last_watered.into(),
        status: PlantStatus::from(status),
        image: image.into(),
    }
}

fn device(id: u32, name: &str, plant: &str, battery: u8, signal: SignalStrength) -> Device {
    Device {
        id: DeviceId(id),
        name: name.into(),
        plant: plant.into(),
        battery,
        signal,
    }
}

fn notification(
    id: u32,
    kind: NotificationKind,
    title: &str,
    message: &str,
    time: &str,
    read: bool,
) -> Notification {
    Notification {
        id: NotificationId(id),
        kind,
        title: title.into(),
        message: message.into(),
        time: time.into(),
        read,
    }
}

fn entry(id: u32, name: &str, difficulty: Difficulty, image: &str) -> LibraryEntry {
    LibraryEntry {
        id: EntryId(id),
        name: name.into(),
        difficulty,
        category: "Indoor".into(),
        image: image.into(),
    }
}
