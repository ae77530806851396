//! Bottom status bar: key hints for the visible screen.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use paws_core::nav::{Screen, Tab};

use crate::app::AppState;

pub fn hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Scanner | Screen::PlantDetail(_) => " [Esc]back [q]uit",
        Screen::Main(Tab::Dashboard) => " [j/k]select [Enter]open [1-5/Tab]switch [q]uit",
        Screen::Main(Tab::Devices) => " [j/k]select [s]scan QR [1-5/Tab]switch [q]uit",
        Screen::Main(Tab::Plants | Tab::Notifications) => " [j/k]scroll [1-5/Tab]switch [q]uit",
        Screen::Main(Tab::Profile) => " [1-5/Tab]switch [q]uit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let line = Line::from(Span::styled(hints(app.screen()), app.theme.muted()));
    f.render_widget(Paragraph::new(line), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use paws_core::domain::PlantId;

    #[test]
    fn overlay_hints_offer_back() {
        assert!(hints(Screen::Scanner).contains("[Esc]back"));
        assert!(hints(Screen::PlantDetail(PlantId(1))).contains("[Esc]back"));
        assert!(!hints(Screen::Main(Tab::Profile)).contains("[Esc]back"));
        assert!(hints(Screen::Main(Tab::Devices)).contains("scan QR"));
        assert!(hints(Screen::Main(Tab::Plants)).contains("[j/k]scroll"));
    }
}
