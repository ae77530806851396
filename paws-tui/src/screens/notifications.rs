//! Alerts tab: notifications with unread markers.
//!
//! Unread cards get a brand-colored accent bar on the left edge and a dot on
//! the right. Viewing a card never changes its read flag.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use paws_core::domain::Notification;
use paws_core::view;

use crate::screens::{card, heading, scrolled};
use crate::theme::{self, Theme};

const CARD_HEIGHT: u16 = 5;
const ACCENT_BAR: &str = "▌";

pub struct NotificationsScreen<'a> {
    notifications: &'a [Notification],
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> NotificationsScreen<'a> {
    pub fn new(notifications: &'a [Notification], theme: &'a Theme) -> Self {
        Self {
            notifications,
            cursor: 0,
            theme,
        }
    }

    /// Focus a card; the list scrolls to keep it visible.
    pub fn focus(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    fn render_card(&self, note: &Notification, focused: bool, area: Rect, buf: &mut Buffer) {
        let marker = view::unread_marker(note.read);

        let [bar, body] =
            Layout::horizontal([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        if marker.accent_bar {
            let accent = Style::default().fg(self.theme.brand_light);
            for y in bar.top()..bar.bottom() {
                buf.set_string(bar.x, y, ACCENT_BAR, accent);
            }
        }

        let block = card(self.theme, focused);
        let inner = block.inner(body);
        block.render(body, buf);

        let [icon, text, dot] = Layout::horizontal([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .areas(inner);

        let icon_color = self.theme.tone(view::notification_tone(&note.kind));
        Paragraph::new(Span::styled(
            theme::glyph(view::notification_icon(&note.kind)),
            Style::default().fg(icon_color),
        ))
        .render(icon, buf);

        Paragraph::new(vec![
            Line::from(Span::styled(
                note.title.clone(),
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(note.message.clone(), self.theme.secondary())),
            Line::from(Span::styled(note.time.clone(), self.theme.muted())),
        ])
        .render(text, buf);

        if marker.dot {
            Paragraph::new(Span::styled(
                theme::DOT,
                Style::default().fg(self.theme.brand_light),
            ))
            .render(dot, buf);
        }
    }
}

impl<'a> Widget for NotificationsScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        Paragraph::new(heading("Notifications", self.theme)).render(title, buf);

        if self.notifications.is_empty() {
            Paragraph::new(Span::styled("You're all caught up.", self.theme.muted()))
                .render(list, buf);
            return;
        }

        let count = self.notifications.len();
        for (index, row) in scrolled(list, CARD_HEIGHT, count, self.cursor) {
            self.render_card(&self.notifications[index], index == self.cursor, row, buf);
        }
    }
}
