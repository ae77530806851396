//! Domain types for the P.A.W.S plant monitor

pub mod device;
pub mod ids;
pub mod library;
pub mod notification;
pub mod plant;
pub mod profile;

pub use device::{Device, SignalStrength};
pub use ids::{DeviceId, EntryId, NotificationId, PlantId};
pub use library::{Difficulty, LibraryEntry};
pub use notification::{Notification, NotificationKind};
pub use plant::{Plant, PlantStatus};
pub use profile::UserProfile;
