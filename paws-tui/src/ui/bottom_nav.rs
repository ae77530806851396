//! Bottom navigation bar: five fixed tabs, active one highlighted.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use paws_core::nav::{nav_bar, Tab};

use crate::theme::{self, Theme};

pub struct BottomNav<'a> {
    active: Tab,
    theme: &'a Theme,
}

impl<'a> BottomNav<'a> {
    pub fn new(active: Tab, theme: &'a Theme) -> Self {
        Self { active, theme }
    }
}

impl<'a> Widget for BottomNav<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.muted());
        let inner = block.inner(area);
        block.render(area, buf);

        let items = nav_bar(self.active);
        let slots = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(inner);
        for (item, slot) in items.iter().zip(slots.iter()) {
            let style = if item.active {
                Style::default()
                    .fg(self.theme.brand_light)
                    .add_modifier(Modifier::BOLD)
            } else {
                self.theme.muted()
            };
            Paragraph::new(vec![
                Line::from(Span::styled(theme::glyph(item.icon), style)),
                Line::from(Span::styled(
                    format!("{} {}", item.tab.index() + 1, item.label),
                    style,
                )),
            ])
            .alignment(Alignment::Center)
            .render(*slot, buf);
        }
    }
}
