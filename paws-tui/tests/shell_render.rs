//! End-to-end shell tests: key presses in, rendered frames out.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use paws_core::domain::{PlantId, UserProfile};
use paws_core::nav::{Screen, Tab};
use paws_core::Catalog;
use paws_tui::{handle_key, ui, AppState};
use proptest::prelude::*;

fn frame_text(app: &AppState) -> String {
    frame_text_sized(app, 80, 48)
}

fn frame_text_sized(app: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buf = terminal.backend().buffer();
    let area = buf.area;
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf.cell((x, y)).unwrap().symbol())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut AppState, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn new_app() -> AppState {
    AppState::new(Catalog::builtin(), UserProfile::default())
}

#[test]
fn dashboard_with_bottom_nav() {
    let app = new_app();
    let text = frame_text(&app);
    assert!(text.contains("Welcome, Emma"));
    assert!(text.contains("1 Home"));
    assert!(text.contains("5 Profile"));
}

#[test]
fn every_tab_renders_its_screen() {
    let expected = [
        (Tab::Dashboard, "Your plants are looking great!"),
        (Tab::Plants, "Plant Library"),
        (Tab::Devices, "Connected to: Fiddle Leaf Fig"),
        (Tab::Notifications, "Low Moisture Alert"),
        (Tab::Profile, "Emma Johnson"),
    ];
    let mut app = new_app();
    for (tab, marker) in expected {
        press(&mut app, KeyCode::Char((b'1' + tab.index() as u8) as char));
        assert_eq!(app.screen(), Screen::Main(tab));
        let text = frame_text(&app);
        assert!(text.contains(marker), "{tab}: missing {marker}");
        assert!(text.contains("4 Alerts"), "{tab}: bottom nav hidden");
    }
}

#[test]
fn plant_detail_hides_bottom_nav() {
    let mut app = new_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::PlantDetail(PlantId(4)));

    let text = frame_text(&app);
    assert!(text.contains("Plant Details"));
    assert!(text.contains("Strelitzia reginae"));
    assert!(!text.contains("1 Home"));

    press(&mut app, KeyCode::Esc);
    assert!(frame_text(&app).contains("1 Home"));
}

#[test]
fn scanner_then_back_returns_to_devices() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('s'));

    let text = frame_text(&app);
    assert!(text.contains("Scan QR code on your P.A.W.S device"));
    assert!(!text.contains("3 Devices"));

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.screen(), Screen::Main(Tab::Devices));
    assert!(frame_text(&app).contains("P.A.W.S Device #001"));
}

#[test]
fn library_scrolls_to_every_entry_on_short_terminal() {
    let mut app = new_app();
    press(&mut app, KeyCode::Char('2'));
    let names: Vec<String> = app.catalog.library().iter().map(|e| e.name.clone()).collect();

    let first = frame_text_sized(&app, 80, 24);
    assert!(!first.contains(names.last().unwrap().as_str()));

    let mut seen = vec![false; names.len()];
    for _ in 0..names.len() {
        let text = frame_text_sized(&app, 80, 24);
        for (name, seen) in names.iter().zip(seen.iter_mut()) {
            *seen |= text.contains(name.as_str());
        }
        press(&mut app, KeyCode::Char('j'));
    }
    assert!(seen.iter().all(|s| *s), "unreachable entries: {seen:?}");
    assert!(frame_text_sized(&app, 80, 24).contains("Rubber Plant"));
}

#[test]
fn small_terminal_does_not_panic() {
    let app = new_app();
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    terminal.draw(|f| ui::draw(f, &app)).unwrap();
}

fn key_code() -> impl Strategy<Value = KeyCode> {
    prop_oneof![
        prop::sample::select(vec!['1', '2', '3', '4', '5', 'j', 'k', 'h', 'l', 's'])
            .prop_map(KeyCode::Char),
        Just(KeyCode::Enter),
        Just(KeyCode::Esc),
        Just(KeyCode::Tab),
        Just(KeyCode::BackTab),
        Just(KeyCode::Up),
        Just(KeyCode::Down),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn bottom_nav_visible_only_on_tabs(keys in prop::collection::vec(key_code(), 0..24)) {
        let mut app = new_app();
        for key in keys {
            press(&mut app, key);
        }
        prop_assert!(app.running);
        let text = frame_text(&app);
        prop_assert_eq!(text.contains("2 Plants"), app.screen().shows_bottom_nav());
    }
}
