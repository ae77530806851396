//! Plants tab: the plant library.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use paws_core::domain::LibraryEntry;
use paws_core::view;

use crate::screens::{card, heading, scrolled};
use crate::theme::Theme;

const ENTRY_HEIGHT: u16 = 5;

pub struct LibraryScreen<'a> {
    entries: &'a [LibraryEntry],
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> LibraryScreen<'a> {
    pub fn new(entries: &'a [LibraryEntry], theme: &'a Theme) -> Self {
        Self {
            entries,
            cursor: 0,
            theme,
        }
    }

    /// Focus an entry; the list scrolls to keep it visible.
    pub fn focus(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Difficulty badge: dark text on the tone color.
    fn badge(&self, entry: &'a LibraryEntry) -> Span<'a> {
        let tone = view::difficulty_tone(&entry.difficulty);
        Span::styled(
            format!(" {} ", entry.difficulty),
            Style::default()
                .fg(Color::Black)
                .bg(self.theme.tone(tone))
                .add_modifier(Modifier::BOLD),
        )
    }
}

impl<'a> Widget for LibraryScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(heading("Plant Library", self.theme)).render(title, buf);

        for (index, row) in scrolled(list, ENTRY_HEIGHT, self.entries.len(), self.cursor) {
            let entry = &self.entries[index];
            let block = card(self.theme, index == self.cursor);
            let inner = block.inner(row);
            block.render(row, buf);

            let [image, text] =
                Layout::horizontal([Constraint::Length(5), Constraint::Min(0)]).areas(inner);
            Paragraph::new(Line::from(format!(" {}", entry.image))).render(image, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    entry.name.as_str(),
                    Style::default()
                        .fg(self.theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(entry.category.as_str(), self.theme.secondary())),
                Line::from(self.badge(entry)),
            ])
            .render(text, buf);
        }
    }
}
