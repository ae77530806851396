//! Profile tab: user card, settings and support lists. Entries are inert.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use paws_core::domain::UserProfile;

use crate::screens::{card, heading};
use crate::theme::Theme;

const SETTINGS: [&str; 3] = ["Notifications", "Device Management", "Account Settings"];
const SUPPORT: [&str; 3] = ["Help Center", "Contact Support", "About P.A.W.S"];

pub struct ProfileScreen<'a> {
    profile: &'a UserProfile,
    theme: &'a Theme,
}

impl<'a> ProfileScreen<'a> {
    pub fn new(profile: &'a UserProfile, theme: &'a Theme) -> Self {
        Self { profile, theme }
    }

    fn render_section(&self, title: &str, items: &[&str], area: Rect, buf: &mut Buffer) {
        let block = card(self.theme, false).title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<Line> = items
            .iter()
            .map(|item| Line::from(Span::styled(format!(" {item}"), self.theme.secondary())))
            .collect();
        Paragraph::new(lines).render(inner, buf);
    }
}

impl<'a> Widget for ProfileScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, _, user, settings, support] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Length(5),
        ])
        .areas(area);

        Paragraph::new(heading("Profile", self.theme)).render(title, buf);

        let block = card(self.theme, false);
        let inner = block.inner(user);
        block.render(user, buf);
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!(" {} ", self.profile.initial()),
                self.theme.button(),
            )),
            Line::from(Span::styled(
                self.profile.name.clone(),
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.profile.title.clone(),
                self.theme.secondary(),
            )),
        ])
        .alignment(Alignment::Center)
        .render(inner, buf);

        self.render_section("Settings", &SETTINGS, settings, buf);
        self.render_section("Support", &SUPPORT, support, buf);
    }
}
