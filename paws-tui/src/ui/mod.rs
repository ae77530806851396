//! Top-level UI layout: screen content, bottom navigation, status bar.

pub mod bottom_nav;
pub mod status_bar;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::Frame;

use paws_core::nav::{Screen, Tab};

use crate::app::AppState;
use crate::screens::{
    DashboardScreen, DevicesScreen, LibraryScreen, NotificationsScreen, PlantDetailScreen,
    ProfileScreen, ScannerScreen,
};

pub use bottom_nav::BottomNav;

/// Bottom navigation height: top rule, glyph row, label row.
const NAV_HEIGHT: u16 = 3;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let screen = app.screen();

    // Overlays replace the shell and hide the bottom navigation.
    let (content, nav, status) = if screen.shows_bottom_nav() {
        let [content, nav, status] = Layout::vertical([
            Constraint::Min(3),
            Constraint::Length(NAV_HEIGHT),
            Constraint::Length(1),
        ])
        .areas(f.area());
        (content, Some(nav), status)
    } else {
        let [content, status] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(f.area());
        (content, None, status)
    };

    draw_screen(f, padded(content, screen), app, screen);

    if let Some(nav) = nav {
        f.render_widget(BottomNav::new(app.active_tab(), &app.theme), nav);
    }
    status_bar::render(f, status, app);
}

fn draw_screen(f: &mut Frame, area: Rect, app: &AppState, screen: Screen) {
    let theme = &app.theme;
    match screen {
        Screen::Scanner => f.render_widget(ScannerScreen::new(theme), area),
        Screen::PlantDetail(_) => {
            f.render_widget(PlantDetailScreen::new(app.detail_plant(), theme), area)
        }
        Screen::Main(Tab::Dashboard) => f.render_widget(
            DashboardScreen::new(&app.catalog, &app.profile, app.plant_cursor, theme),
            area,
        ),
        Screen::Main(Tab::Plants) => {
            let list = LibraryScreen::new(app.catalog.library(), theme)
                .focus(app.list_cursor(Tab::Plants));
            f.render_widget(list, area)
        }
        Screen::Main(Tab::Devices) => {
            let list = DevicesScreen::new(app.catalog.devices(), theme)
                .focus(app.list_cursor(Tab::Devices));
            f.render_widget(list, area)
        }
        Screen::Main(Tab::Notifications) => {
            let list = NotificationsScreen::new(app.catalog.notifications(), theme)
                .focus(app.list_cursor(Tab::Notifications));
            f.render_widget(list, area)
        }
        Screen::Main(Tab::Profile) => f.render_widget(ProfileScreen::new(&app.profile, theme), area),
    }
}

/// One-cell margin around tab content; the scanner paints edge to edge.
fn padded(area: Rect, screen: Screen) -> Rect {
    match screen {
        Screen::Scanner => area,
        _ => Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height,
        },
    }
}
