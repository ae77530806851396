//! Dashboard tab: greeting, quick stats and the plant card grid.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use paws_core::domain::{Plant, UserProfile};
use paws_core::view::{self, Icon};
use paws_core::Catalog;

use crate::screens::card;
use crate::theme::{self, Theme};

/// Card height including borders.
const CARD_HEIGHT: u16 = 7;
const COLUMNS: usize = 2;

pub struct DashboardScreen<'a> {
    catalog: &'a Catalog,
    profile: &'a UserProfile,
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> DashboardScreen<'a> {
    pub fn new(
        catalog: &'a Catalog,
        profile: &'a UserProfile,
        cursor: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            catalog,
            profile,
            cursor,
            theme,
        }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        let [text_area, bell_area] =
            Layout::horizontal([Constraint::Min(10), Constraint::Length(4)]).areas(area);

        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome, {}", self.profile.first_name()),
                self.theme.title(),
            )),
            Line::from(Span::styled(
                "Your plants are looking great!",
                self.theme.secondary(),
            )),
        ])
        .render(text_area, buf);

        let mut bell = vec![Span::styled(
            theme::glyph(Icon::Bell),
            Style::default().fg(self.theme.brand_light),
        )];
        if self.catalog.unread_count() > 0 {
            bell.push(Span::styled(
                theme::DOT,
                Style::default().fg(self.theme.critical),
            ));
        }
        Paragraph::new(Line::from(bell))
            .alignment(Alignment::Right)
            .render(bell_area, buf);
    }

    fn render_stats(&self, area: Rect, buf: &mut Buffer) {
        let stats = self.catalog.quick_stats();
        let cells = [
            (stats.total, "Plants", self.theme.brand_light),
            (stats.healthy, "Healthy", self.theme.good),
            (stats.needs_care, "Need Care", self.theme.caution),
        ];
        let areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
        for ((count, label, color), cell_area) in cells.into_iter().zip(areas.iter()) {
            let block = card(self.theme, false);
            let inner = block.inner(*cell_area);
            block.render(*cell_area, buf);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    count.to_string(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(label, self.theme.secondary())),
            ])
            .alignment(Alignment::Center)
            .render(inner, buf);
        }
    }

    fn render_grid(&self, area: Rect, buf: &mut Buffer) {
        let plants = self.catalog.plants();
        if plants.is_empty() {
            Paragraph::new(Span::styled("No plants yet.", self.theme.muted()))
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let rows = plants.len().div_ceil(COLUMNS);
        let visible_rows = ((area.height / CARD_HEIGHT) as usize).max(1);
        // Scroll so the focused card stays visible.
        let cursor_row = self.cursor / COLUMNS;
        let first_row = (cursor_row + 1).saturating_sub(visible_rows);

        for (slot, row) in (first_row..rows).take(visible_rows).enumerate() {
            let y = area.y + slot as u16 * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let row_area = Rect {
                x: area.x,
                y,
                width: area.width,
                height: CARD_HEIGHT,
            };
            let columns = Layout::horizontal([Constraint::Ratio(1, 2); COLUMNS]).split(row_area);
            for (col, col_area) in columns.iter().enumerate() {
                let index = row * COLUMNS + col;
                if let Some(plant) = plants.get(index) {
                    PlantCard::new(plant, index == self.cursor, self.theme).render(*col_area, buf);
                }
            }
        }
    }
}

impl<'a> Widget for DashboardScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, _, stats, grid] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
        ])
        .areas(area);

        self.render_header(header, buf);
        self.render_stats(stats, buf);
        self.render_grid(grid, buf);
    }
}

/// A single plant card: glyph, name, moisture gauge, last watered, status.
pub struct PlantCard<'a> {
    plant: &'a Plant,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> PlantCard<'a> {
    pub fn new(plant: &'a Plant, focused: bool, theme: &'a Theme) -> Self {
        Self {
            plant,
            focused,
            theme,
        }
    }

    fn gauge(&self) -> Line<'a> {
        let degrees = view::gauge_degrees(self.plant.moisture);
        let style = self.theme.tone_style(view::moisture_tone(self.plant.moisture));
        Line::from(vec![
            Span::styled(theme::gauge_glyph(degrees), style.bg(self.theme.track)),
            Span::raw(" "),
            Span::styled(
                format!("{}%", self.plant.moisture),
                style.add_modifier(Modifier::BOLD),
            ),
        ])
    }
}

impl<'a> Widget for PlantCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = card(self.theme, self.focused);
        let inner = block.inner(area);
        block.render(area, buf);

        let lines = vec![
            Line::from(self.plant.image.as_str()),
            Line::from(Span::styled(
                self.plant.name.as_str(),
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            )),
            self.gauge(),
            Line::from(Span::styled(
                format!("Last watered: {}", self.plant.last_watered),
                self.theme.muted(),
            )),
            Line::from(vec![
                Span::styled(
                    theme::DOT,
                    self.theme.tone_style(view::status_tone(&self.plant.status)),
                ),
                Span::raw(" "),
                Span::styled(view::status_label(&self.plant.status), self.theme.secondary()),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(inner, buf);
    }
}
