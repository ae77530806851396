//! Navigation state machine.
//!
//! Three pieces of state decide what is on screen: the active tab, the plant
//! whose detail view is open, and whether the QR scanner is open. Transitions
//! are a pure function of `(NavState, NavEvent)`, and the visible screen is a
//! single derivation with a fixed priority:
//!
//! ```text
//!     scanner_open ──yes──► Scanner
//!          │no
//!     selected_plant ──some──► PlantDetail(id)
//!          │none
//!     Main(active_tab)          (bottom navigation visible)
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::PlantId;
use crate::view::Icon;

/// One of the five top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Dashboard,
    Plants,
    Devices,
    Notifications,
    Profile,
}

impl Tab {
    /// Bottom navigation order.
    pub const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Plants,
        Tab::Devices,
        Tab::Notifications,
        Tab::Profile,
    ];

    pub fn index(self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Plants => 1,
            Tab::Devices => 2,
            Tab::Notifications => 3,
            Tab::Profile => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        Tab::ALL.get(i).copied()
    }

    /// Stable identifier, e.g. `"notifications"`.
    pub fn id(self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Plants => "plants",
            Tab::Devices => "devices",
            Tab::Notifications => "notifications",
            Tab::Profile => "profile",
        }
    }

    /// Bottom navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Dashboard => "Home",
            Tab::Plants => "Plants",
            Tab::Devices => "Devices",
            Tab::Notifications => "Alerts",
            Tab::Profile => "Profile",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Tab::Dashboard => Icon::Home,
            Tab::Plants => Icon::Leaf,
            Tab::Devices => Icon::Device,
            Tab::Notifications => Icon::Bell,
            Tab::Profile => Icon::User,
        }
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Tab {
    type Err = ParseEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| ParseEventError::UnknownTab(s.to_string()))
    }
}

/// An entry of the bottom navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub tab: Tab,
    pub icon: Icon,
    pub label: &'static str,
    pub active: bool,
}

const fn item(tab: Tab, icon: Icon, label: &'static str) -> NavItem {
    NavItem {
        tab,
        icon,
        label,
        active: false,
    }
}

/// The five bottom navigation items, in display order.
pub const NAV_ITEMS: [NavItem; 5] = [
    item(Tab::Dashboard, Icon::Home, "Home"),
    item(Tab::Plants, Icon::Leaf, "Plants"),
    item(Tab::Devices, Icon::Device, "Devices"),
    item(Tab::Notifications, Icon::Bell, "Alerts"),
    item(Tab::Profile, Icon::User, "Profile"),
];

/// Bottom navigation description with the active tab flagged.
pub fn nav_bar(active: Tab) -> [NavItem; 5] {
    NAV_ITEMS.map(|item| NavItem {
        active: item.tab == active,
        ..item
    })
}

/// User activations consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    SelectTab(Tab),
    OpenPlantDetail(PlantId),
    OpenScanner,
    /// Single back action: clears both overlays, whichever was open.
    CloseOverlay,
}

impl fmt::Display for NavEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavEvent::SelectTab(tab) => write!(f, "tab:{tab}"),
            NavEvent::OpenPlantDetail(id) => write!(f, "plant:{id}"),
            NavEvent::OpenScanner => f.write_str("scan"),
            NavEvent::CloseOverlay => f.write_str("back"),
        }
    }
}

/// Errors from parsing the compact event form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("unknown tab '{0}' (expected dashboard, plants, devices, notifications, profile)")]
    UnknownTab(String),
    #[error("invalid plant id '{0}'")]
    InvalidPlantId(String),
    #[error("unknown event '{0}' (expected tab:<id>, plant:<id>, scan, back)")]
    UnknownEvent(String),
}

impl FromStr for NavEvent {
    type Err = ParseEventError;

    /// Parse `tab:<id>`, `plant:<id>`, `scan` or `back`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.split_once(':') {
            Some(("tab", tab)) => Ok(NavEvent::SelectTab(tab.parse()?)),
            Some(("plant", id)) => id
                .parse::<u32>()
                .map(|id| NavEvent::OpenPlantDetail(PlantId(id)))
                .map_err(|_| ParseEventError::InvalidPlantId(id.to_string())),
            None if s == "scan" => Ok(NavEvent::OpenScanner),
            None if s == "back" => Ok(NavEvent::CloseOverlay),
            _ => Err(ParseEventError::UnknownEvent(s.to_string())),
        }
    }
}

/// Raw navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavState {
    pub active_tab: Tab,
    pub selected_plant: Option<PlantId>,
    pub scanner_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Dashboard,
            selected_plant: None,
            scanner_open: false,
        }
    }
}

/// The visible screen, derived from [`NavState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Scanner,
    PlantDetail(PlantId),
    Main(Tab),
}

impl Screen {
    pub fn is_overlay(self) -> bool {
        !matches!(self, Screen::Main(_))
    }

    /// Overlays hide the bottom navigation.
    pub fn shows_bottom_nav(self) -> bool {
        !self.is_overlay()
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Scanner => f.write_str("scanner"),
            Screen::PlantDetail(id) => write!(f, "plant-detail({id})"),
            Screen::Main(tab) => write!(f, "main({tab})"),
        }
    }
}

impl NavState {
    /// Apply the overlay priority: scanner, then plant detail, then the tab.
    pub fn screen(&self) -> Screen {
        if self.scanner_open {
            Screen::Scanner
        } else if let Some(id) = self.selected_plant {
            Screen::PlantDetail(id)
        } else {
            Screen::Main(self.active_tab)
        }
    }
}

/// Pure transition function. Total: every event yields a next state.
pub fn transition(state: NavState, event: NavEvent) -> NavState {
    match event {
        NavEvent::SelectTab(tab) => NavState {
            active_tab: tab,
            ..state
        },
        NavEvent::OpenPlantDetail(id) => NavState {
            selected_plant: Some(id),
            ..state
        },
        NavEvent::OpenScanner => NavState {
            scanner_open: true,
            ..state
        },
        NavEvent::CloseOverlay => NavState {
            selected_plant: None,
            scanner_open: false,
            ..state
        },
    }
}

/// Owner of the navigation state for one session.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    state: NavState,
    applied: usize,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavState {
        self.state
    }

    pub fn screen(&self) -> Screen {
        self.state.screen()
    }

    /// Number of events applied so far.
    pub fn applied(&self) -> usize {
        self.applied
    }

    /// Apply an event and return the resulting screen.
    pub fn apply(&mut self, event: NavEvent) -> Screen {
        let before = self.state.screen();
        self.state = transition(self.state, event);
        self.applied += 1;
        let after = self.state.screen();
        tracing::debug!(%event, from = %before, to = %after, "navigation");
        after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_dashboard() {
        let state = NavState::default();
        assert_eq!(state.screen(), Screen::Main(Tab::Dashboard));
        assert!(state.screen().shows_bottom_nav());
    }

    #[test]
    fn tab_cycle() {
        assert_eq!(Tab::Dashboard.next(), Tab::Plants);
        assert_eq!(Tab::Profile.next(), Tab::Dashboard);
        assert_eq!(Tab::Dashboard.prev(), Tab::Profile);
        assert_eq!(Tab::Plants.prev(), Tab::Dashboard);
    }

    #[test]
    fn tab_from_index() {
        for i in 0..5 {
            let t = Tab::from_index(i).unwrap();
            assert_eq!(t.index(), i);
        }
        assert!(Tab::from_index(5).is_none());
    }

    #[test]
    fn nav_bar_labels_and_active_flag() {
        let bar = nav_bar(Tab::Notifications);
        let labels: Vec<&str> = bar.iter().map(|i| i.label).collect();
        assert_eq!(labels, ["Home", "Plants", "Devices", "Alerts", "Profile"]);
        let active: Vec<Tab> = bar.iter().filter(|i| i.active).map(|i| i.tab).collect();
        assert_eq!(active, [Tab::Notifications]);
        assert_eq!(bar[0].icon, Icon::Home);
    }

    #[test]
    fn nav_items_agree_with_tabs() {
        for (item, tab) in NAV_ITEMS.iter().zip(Tab::ALL) {
            assert_eq!(item.tab, tab);
            assert_eq!(item.label, tab.label());
            assert_eq!(item.icon, tab.icon());
            assert!(!item.active);
        }
    }

    #[test]
    fn scanner_beats_plant_detail() {
        let state = NavState {
            active_tab: Tab::Dashboard,
            selected_plant: Some(PlantId(2)),
            scanner_open: true,
        };
        assert_eq!(state.screen(), Screen::Scanner);
        assert!(!state.screen().shows_bottom_nav());
    }

    #[test]
    fn open_plant_keeps_tab() {
        let state = NavState {
            active_tab: Tab::Profile,
            ..NavState::default()
        };
        let next = transition(state, NavEvent::OpenPlantDetail(PlantId(4)));
        assert_eq!(next.active_tab, Tab::Profile);
        assert_eq!(next.screen(), Screen::PlantDetail(PlantId(4)));
    }

    #[test]
    fn back_clears_both_overlays() {
        let state = NavState {
            active_tab: Tab::Devices,
            selected_plant: Some(PlantId(1)),
            scanner_open: true,
        };
        let next = transition(state, NavEvent::CloseOverlay);
        assert_eq!(next.selected_plant, None);
        assert!(!next.scanner_open);
        assert_eq!(next.screen(), Screen::Main(Tab::Devices));
    }

    #[test]
    fn select_tab_under_overlay_is_masked() {
        let state = transition(NavState::default(), NavEvent::OpenScanner);
        let state = transition(state, NavEvent::SelectTab(Tab::Profile));
        assert_eq!(state.screen(), Screen::Scanner);
        let state = transition(state, NavEvent::CloseOverlay);
        assert_eq!(state.screen(), Screen::Main(Tab::Profile));
    }

    #[test]
    fn parse_events() {
        assert_eq!(
            "tab:devices".parse::<NavEvent>().unwrap(),
            NavEvent::SelectTab(Tab::Devices)
        );
        assert_eq!(
            "plant:3".parse::<NavEvent>().unwrap(),
            NavEvent::OpenPlantDetail(PlantId(3))
        );
        assert_eq!(" scan ".parse::<NavEvent>().unwrap(), NavEvent::OpenScanner);
        assert_eq!("back".parse::<NavEvent>().unwrap(), NavEvent::CloseOverlay);
    }

    #[test]
    fn parse_event_errors() {
        assert_eq!(
            "tab:garden".parse::<NavEvent>(),
            Err(ParseEventError::UnknownTab("garden".into()))
        );
        assert_eq!(
            "plant:x".parse::<NavEvent>(),
            Err(ParseEventError::InvalidPlantId("x".into()))
        );
        assert_eq!(
            "water".parse::<NavEvent>(),
            Err(ParseEventError::UnknownEvent("water".into()))
        );
    }

    #[test]
    fn event_display_parses_back() {
        for event in [
            NavEvent::SelectTab(Tab::Notifications),
            NavEvent::OpenPlantDetail(PlantId(7)),
            NavEvent::OpenScanner,
            NavEvent::CloseOverlay,
        ] {
            assert_eq!(event.to_string().parse::<NavEvent>().unwrap(), event);
        }
    }

    #[test]
    fn navigator_counts_events() {
        let mut nav = Navigator::new();
        assert_eq!(nav.apply(NavEvent::SelectTab(Tab::Devices)), Screen::Main(Tab::Devices));
        assert_eq!(nav.apply(NavEvent::OpenScanner), Screen::Scanner);
        assert_eq!(nav.apply(NavEvent::CloseOverlay), Screen::Main(Tab::Devices));
        assert_eq!(nav.applied(), 3);
    }
}
