//! P.A.W.S TUI - terminal shell for the plant monitor
//!
//! Renders the tabbed shell (dashboard, plant library, devices, alerts,
//! profile) and the two full-screen overlays (plant detail, QR scanner) from
//! the navigation state held in `paws-core`.

pub mod app;
pub mod input;
pub mod logging;
pub mod screens;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;

#[cfg(test)]
mod test_helpers;
