//! Screen widgets
//!
//! Main shell tabs:
//! - Dashboard: greeting, quick stats, plant card grid
//! - Library: plant library with difficulty badges
//! - Devices: paired sensors, Scan QR action
//! - Notifications: alerts with unread markers
//! - Profile: user card, settings and support lists
//!
//! Overlays (replace the shell, no bottom navigation):
//! - PlantDetail: sensor readings and care information for one plant
//! - Scanner: QR scan frame

pub mod dashboard;
pub mod devices;
pub mod library;
pub mod notifications;
pub mod plant_detail;
pub mod profile;
pub mod scanner;

pub use dashboard::DashboardScreen;
pub use devices::DevicesScreen;
pub use library::LibraryScreen;
pub use notifications::NotificationsScreen;
pub use plant_detail::PlantDetailScreen;
pub use profile::ProfileScreen;
pub use scanner::ScannerScreen;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType},
};

use crate::theme::Theme;

/// Rounded card frame.
pub(crate) fn card<'a>(theme: &Theme, focused: bool) -> Block<'a> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.card_border(focused))
}

/// Screen heading, e.g. "Plant Library".
pub(crate) fn heading<'a>(text: impl Into<String>, theme: &Theme) -> Line<'a> {
    Line::from(Span::styled(text.into(), theme.title()))
}

/// Rows of `height` stacked from the top of `area`, as many as fit.
pub(crate) fn stack(area: Rect, height: u16, count: usize) -> Vec<Rect> {
    let fit = (area.height / height.max(1)) as usize;
    (0..count.min(fit))
        .map(|i| Rect {
            x: area.x,
            y: area.y + i as u16 * height,
            width: area.width,
            height,
        })
        .collect()
}

/// Rows for a list of `count` items scrolled so `cursor` stays visible.
/// Yields `(item index, row)`.
pub(crate) fn scrolled(
    area: Rect,
    height: u16,
    count: usize,
    cursor: usize,
) -> Vec<(usize, Rect)> {
    let fit = ((area.height / height.max(1)) as usize).max(1);
    let first = (cursor.min(count.saturating_sub(1)) + 1).saturating_sub(fit);
    stack(area, height, count - first)
        .into_iter()
        .enumerate()
        .map(|(i, row)| (first + i, row))
        .collect()
}
