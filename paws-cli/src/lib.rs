//! Report builders behind the `paws` command line.
//!
//! Every command renders into a `String` so the binary only prints.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

use paws_core::nav::{NavEvent, Screen};
use paws_core::{Catalog, Navigator};

/// Human-readable listing of every collection in the catalog.
pub fn catalog_text(catalog: &Catalog) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Plants ({})", catalog.plants().len());
    for plant in catalog.plants() {
        let _ = writeln!(
            out,
            "  #{:<3} {:<20} {:<26} moisture {:>3}%  {:>3}°C  humidity {:>3}%  light {:<8} {}",
            plant.id.0,
            plant.name,
            plant.scientific_name,
            plant.moisture,
            plant.temperature,
            plant.humidity,
            plant.light,
            plant.status,
        );
    }

    let _ = writeln!(out, "Devices ({})", catalog.devices().len());
    for device in catalog.devices() {
        let _ = writeln!(
            out,
            "  {:<22} -> {:<20} battery {:>3}%  signal {}",
            device.name, device.plant, device.battery, device.signal,
        );
    }

    let _ = writeln!(
        out,
        "Notifications ({}, {} unread)",
        catalog.notifications().len(),
        catalog.unread_count()
    );
    for note in catalog.notifications() {
        let marker = if note.read { ' ' } else { '*' };
        let _ = writeln!(
            out,
            "  {marker} [{}] {} - {} ({})",
            note.kind, note.title, note.message, note.time
        );
    }

    let _ = writeln!(out, "Library ({})", catalog.library().len());
    for entry in catalog.library() {
        let _ = writeln!(
            out,
            "  {:<20} {:<8} {}",
            entry.name,
            entry.difficulty.as_str(),
            entry.category
        );
    }
    out
}

pub fn catalog_json(catalog: &Catalog) -> Result<String> {
    serde_json::to_string_pretty(catalog).context("serialize catalog")
}

/// Quick stats as shown on the dashboard, plus the unread count.
pub fn stats_text(catalog: &Catalog) -> String {
    let stats = catalog.quick_stats();
    format!(
        "total plants: {}\nhealthy:      {}\nneeds care:   {}\nunread alerts: {}\n",
        stats.total,
        stats.healthy,
        stats.needs_care,
        catalog.unread_count()
    )
}

/// Load and validate a catalog file, returning a one-line summary.
pub fn check_file(path: &Path) -> Result<String> {
    let catalog = Catalog::from_file(path)?;
    Ok(format!(
        "{}: ok ({} plants, {} devices, {} notifications, {} library entries)",
        path.display(),
        catalog.plants().len(),
        catalog.devices().len(),
        catalog.notifications().len(),
        catalog.library().len()
    ))
}

/// Parse every event up front, then run them through a fresh navigator.
/// Returns the screen after each event.
pub fn replay<S: AsRef<str>>(events: &[S]) -> Result<Vec<(NavEvent, Screen)>> {
    let events = events
        .iter()
        .map(|raw| {
            raw.as_ref()
                .parse::<NavEvent>()
                .with_context(|| format!("parse event '{}'", raw.as_ref()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut nav = Navigator::new();
    Ok(events
        .into_iter()
        .map(|event| (event, nav.apply(event)))
        .collect())
}

/// One line per step, starting from the initial screen. Plant detail steps
/// naming an id the catalog lacks are flagged.
pub fn replay_text(steps: &[(NavEvent, Screen)], catalog: &Catalog) -> String {
    let mut out = format!("start       {}\n", Navigator::new().screen());
    for (event, screen) in steps {
        let _ = write!(out, "{:<11} {screen}", event.to_string());
        if let Screen::PlantDetail(id) = screen {
            match catalog.plant(*id) {
                Some(plant) => {
                    let _ = write!(out, "  {}", plant.name);
                }
                None => out.push_str("  (not in catalog)"),
            }
        }
        out.push('\n');
    }
    out
}
