//! Keyboard input dispatch: overlays → global keys → screen-specific handlers.
//!
//! Every navigation change goes through [`AppState::apply`] as a
//! [`NavEvent`]; this module only decides which event a key means.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use paws_core::nav::{NavEvent, Screen, Tab};

use crate::app::AppState;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // 1. Overlays consume input first: only back and quit act there.
    if app.screen().is_overlay() {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => {
                app.apply(NavEvent::CloseOverlay);
            }
            KeyCode::Char('q') => app.quit(),
            _ => {}
        }
        return;
    }

    // 2. Bottom navigation (only reachable while the main shell is visible).
    match key.code {
        KeyCode::Char('q') => {
            app.quit();
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(tab) = Tab::from_index(index) {
                app.apply(NavEvent::SelectTab(tab));
            }
            return;
        }
        KeyCode::Tab => {
            let tab = if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_tab().prev()
            } else {
                app.active_tab().next()
            };
            app.apply(NavEvent::SelectTab(tab));
            return;
        }
        KeyCode::BackTab => {
            let tab = app.active_tab().prev();
            app.apply(NavEvent::SelectTab(tab));
            return;
        }
        _ => {}
    }

    // 3. Screen-specific keys.
    if let Screen::Main(tab) = app.screen() {
        match tab {
            Tab::Dashboard => handle_dashboard_key(app, key),
            Tab::Devices => handle_devices_key(app, key),
            Tab::Plants | Tab::Notifications => handle_list_key(app, tab, key),
            Tab::Profile => {} // display only
        }
    }
}

fn handle_dashboard_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down | KeyCode::Char('l') | KeyCode::Right => {
            app.cursor_next();
        }
        KeyCode::Char('k') | KeyCode::Up | KeyCode::Char('h') | KeyCode::Left => {
            app.cursor_prev();
        }
        KeyCode::Enter => app.open_cursor_plant(),
        _ => {}
    }
}

fn handle_devices_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('s') | KeyCode::Enter => {
            app.apply(NavEvent::OpenScanner);
        }
        _ => handle_list_key(app, Tab::Devices, key),
    }
}

/// Cursor movement on the scrollable list tabs.
fn handle_list_key(app: &mut AppState, tab: Tab, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.list_next(tab),
        KeyCode::Char('k') | KeyCode::Up => app.list_prev(tab),
        _ => {}
    }
}
