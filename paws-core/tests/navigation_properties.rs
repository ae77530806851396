//! Property tests for navigation invariants.
//!
//! Uses proptest to verify:
//! 1. Selecting a tab with no overlay shows that tab's main screen
//! 2. Opening a plant shows its detail regardless of the prior tab
//! 3. The scanner always wins over an open plant detail
//! 4. Back returns to the last selected tab after any event sequence

use paws_core::domain::PlantId;
use paws_core::nav::{transition, NavEvent, NavState, Screen, Tab};
use paws_core::Catalog;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_tab() -> impl Strategy<Value = Tab> {
    (0usize..5).prop_map(|i| Tab::from_index(i).unwrap())
}

fn arb_plant_id() -> impl Strategy<Value = PlantId> {
    (1u32..=4).prop_map(PlantId)
}

fn arb_event() -> impl Strategy<Value = NavEvent> {
    prop_oneof![
        arb_tab().prop_map(NavEvent::SelectTab),
        arb_plant_id().prop_map(NavEvent::OpenPlantDetail),
        Just(NavEvent::OpenScanner),
        Just(NavEvent::CloseOverlay),
    ]
}

fn arb_state() -> impl Strategy<Value = NavState> {
    (arb_tab(), proptest::option::of(arb_plant_id()), any::<bool>()).prop_map(
        |(active_tab, selected_plant, scanner_open)| NavState {
            active_tab,
            selected_plant,
            scanner_open,
        },
    )
}

fn replay(events: &[NavEvent]) -> NavState {
    events
        .iter()
        .fold(NavState::default(), |state, event| transition(state, *event))
}

proptest! {
    #[test]
    fn select_tab_without_overlay_shows_tab(tab in arb_tab(), prior in arb_tab()) {
        let state = NavState { active_tab: prior, ..NavState::default() };
        let next = transition(state, NavEvent::SelectTab(tab));
        prop_assert_eq!(next.screen(), Screen::Main(tab));
        prop_assert_eq!(next.selected_plant, None);
        prop_assert!(!next.scanner_open);
    }

    #[test]
    fn open_plant_shows_detail_for_that_plant(prior in arb_tab(), id in arb_plant_id()) {
        let state = NavState { active_tab: prior, ..NavState::default() };
        let next = transition(state, NavEvent::OpenPlantDetail(id));
        prop_assert_eq!(next.screen(), Screen::PlantDetail(id));
        prop_assert_eq!(next.active_tab, prior);
    }

    #[test]
    fn scanner_always_visible_after_open(state in arb_state()) {
        let next = transition(state, NavEvent::OpenScanner);
        prop_assert_eq!(next.screen(), Screen::Scanner);
        prop_assert!(!next.screen().shows_bottom_nav());
    }

    #[test]
    fn back_restores_last_tab(events in proptest::collection::vec(arb_event(), 0..40)) {
        let state = replay(&events);
        let last_tab = events
            .iter()
            .rev()
            .find_map(|e| match e {
                NavEvent::SelectTab(t) => Some(*t),
                _ => None,
            })
            .unwrap_or(Tab::Dashboard);
        let back = transition(state, NavEvent::CloseOverlay);
        prop_assert_eq!(back.screen(), Screen::Main(last_tab));
    }

    #[test]
    fn transition_is_deterministic(state in arb_state(), event in arb_event()) {
        prop_assert_eq!(transition(state, event), transition(state, event));
    }
}

#[test]
fn every_catalog_plant_opens_its_detail() {
    let catalog = Catalog::builtin();
    for tab in Tab::ALL {
        for plant in catalog.plants() {
            let state = NavState { active_tab: tab, ..NavState::default() };
            let next = transition(state, NavEvent::OpenPlantDetail(plant.id));
            assert_eq!(next.screen(), Screen::PlantDetail(plant.id));
        }
    }
}

#[test]
fn devices_scanner_back_scenario() {
    let state = NavState::default();
    assert_eq!(state.screen(), Screen::Main(Tab::Dashboard));

    let state = transition(state, NavEvent::SelectTab(Tab::Devices));
    assert_eq!(state.screen(), Screen::Main(Tab::Devices));

    let state = transition(state, NavEvent::OpenScanner);
    assert_eq!(state.screen(), Screen::Scanner);

    let state = transition(state, NavEvent::CloseOverlay);
    assert_eq!(state.screen(), Screen::Main(Tab::Devices));
}
