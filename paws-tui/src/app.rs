//! Application state: single-owner, main-thread only.
//!
//! Navigation lives in a [`Navigator`]; everything else here is view-local
//! (card cursors for the dashboard and the list tabs) or read-only (catalog, profile, theme).

use paws_core::domain::{Plant, UserProfile};
use paws_core::nav::{NavEvent, NavState, Navigator, Screen, Tab};
use paws_core::Catalog;

use crate::theme::Theme;

/// Focused row of each scrollable list tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursors {
    pub library: usize,
    pub devices: usize,
    pub notifications: usize,
}

/// Top-level application state.
pub struct AppState {
    pub running: bool,
    pub catalog: Catalog,
    pub profile: UserProfile,
    pub theme: Theme,
    /// Index of the focused plant card on the dashboard.
    pub plant_cursor: usize,
    pub lists: ListCursors,
    nav: Navigator,
}

impl AppState {
    pub fn new(catalog: Catalog, profile: UserProfile) -> Self {
        Self {
            running: true,
            catalog,
            profile,
            theme: Theme::default(),
            plant_cursor: 0,
            lists: ListCursors::default(),
            nav: Navigator::new(),
        }
    }

    pub fn nav_state(&self) -> NavState {
        self.nav.state()
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen()
    }

    pub fn active_tab(&self) -> Tab {
        self.nav.state().active_tab
    }

    /// Route an activation through the navigation state machine.
    pub fn apply(&mut self, event: NavEvent) -> Screen {
        self.nav.apply(event)
    }

    pub fn quit(&mut self) {
        tracing::info!(events = self.nav.applied(), "quit");
        self.running = false;
    }

    /// Plant shown by the detail overlay, if that overlay is visible.
    pub fn detail_plant(&self) -> Option<&Plant> {
        match self.screen() {
            Screen::PlantDetail(id) => self.catalog.plant(id),
            _ => None,
        }
    }

    pub fn cursor_plant(&self) -> Option<&Plant> {
        self.catalog.plants().get(self.plant_cursor)
    }

    pub fn cursor_next(&mut self) {
        if self.plant_cursor + 1 < self.catalog.plants().len() {
            self.plant_cursor += 1;
        }
    }

    pub fn cursor_prev(&mut self) {
        self.plant_cursor = self.plant_cursor.saturating_sub(1);
    }

    /// Cursor of a list tab; 0 for tabs without a list.
    pub fn list_cursor(&self, tab: Tab) -> usize {
        match tab {
            Tab::Plants => self.lists.library,
            Tab::Devices => self.lists.devices,
            Tab::Notifications => self.lists.notifications,
            Tab::Dashboard | Tab::Profile => 0,
        }
    }

    fn list_len(&self, tab: Tab) -> usize {
        match tab {
            Tab::Plants => self.catalog.library().len(),
            Tab::Devices => self.catalog.devices().len(),
            Tab::Notifications => self.catalog.notifications().len(),
            Tab::Dashboard | Tab::Profile => 0,
        }
    }

    fn list_cursor_mut(&mut self, tab: Tab) -> Option<&mut usize> {
        match tab {
            Tab::Plants => Some(&mut self.lists.library),
            Tab::Devices => Some(&mut self.lists.devices),
            Tab::Notifications => Some(&mut self.lists.notifications),
            Tab::Dashboard | Tab::Profile => None,
        }
    }

    pub fn list_next(&mut self, tab: Tab) {
        let len = self.list_len(tab);
        if let Some(cursor) = self.list_cursor_mut(tab) {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        }
    }

    pub fn list_prev(&mut self, tab: Tab) {
        if let Some(cursor) = self.list_cursor_mut(tab) {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// Open the detail overlay for the focused card ("plant card tapped").
    pub fn open_cursor_plant(&mut self) {
        if let Some(id) = self.cursor_plant().map(|p| p.id) {
            self.apply(NavEvent::OpenPlantDetail(id));
        }
    }
}
