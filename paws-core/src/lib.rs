//! P.A.W.S Core: domain types, catalog, navigation state machine, view rules.
//!
//! This crate holds everything the plant monitor shell needs that does not
//! touch a terminal:
//! - Domain types (plants, devices, notifications, library entries, profile)
//! - The read-only entity catalog, built in or loaded from TOML
//! - The navigation state machine and screen derivation
//! - View rules mapping entity fields to tones and icons
//! - Configuration

pub mod catalog;
pub mod config;
pub mod domain;
pub mod nav;
pub mod view;

pub use catalog::{Catalog, CatalogError, QuickStats};
pub use config::{ConfigError, PawsConfig};
pub use nav::{NavEvent, NavState, Navigator, Screen, Tab};
