//! Plant detail overlay: sensor readings and care information.
//!
//! "Water Now" and "View History" are drawn but have no action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use paws_core::domain::Plant;
use paws_core::view::Icon;

use crate::screens::card;
use crate::theme::{self, Theme};

const CARE_TEXT: &str = "Water when the soil's top inch feels dry, about once a week. \
                         Ensure good drainage and avoid overwatering.";

pub struct PlantDetailScreen<'a> {
    /// `None` when the selected id is not in the catalog.
    plant: Option<&'a Plant>,
    theme: &'a Theme,
}

impl<'a> PlantDetailScreen<'a> {
    pub fn new(plant: Option<&'a Plant>, theme: &'a Theme) -> Self {
        Self { plant, theme }
    }

    fn render_header(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::from(vec![
            Span::styled(
                theme::glyph(Icon::Back),
                Style::default().fg(self.theme.brand_light),
            ),
            Span::raw("  "),
            Span::styled(
                "Plant Details",
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]))
        .render(area, buf);
    }

    fn render_metrics(&self, plant: &Plant, area: Rect, buf: &mut Buffer) {
        let metrics = [
            (
                Icon::Droplet,
                Style::default().fg(self.theme.neutral),
                "Moisture",
                format!("{}%", plant.moisture),
            ),
            (
                Icon::Thermometer,
                Style::default().fg(self.theme.critical),
                "Temperature",
                format!("{}°C", plant.temperature),
            ),
            (
                Icon::Eye,
                Style::default().fg(self.theme.brand_light),
                "Humidity",
                format!("{}%", plant.humidity),
            ),
            (
                Icon::Sun,
                Style::default().fg(self.theme.caution),
                "Light",
                plant.light.clone(),
            ),
        ];

        let rows = Layout::vertical([Constraint::Ratio(1, 2); 2]).split(area);
        for (row_index, row) in rows.iter().enumerate() {
            let cols = Layout::horizontal([Constraint::Ratio(1, 2); 2]).split(*row);
            for (col_index, cell) in cols.iter().enumerate() {
                let (icon, icon_style, label, value) = &metrics[row_index * 2 + col_index];
                let block = card(self.theme, false);
                let inner = block.inner(*cell);
                block.render(*cell, buf);
                Paragraph::new(vec![
                    Line::from(Span::styled(theme::glyph(*icon), *icon_style)),
                    Line::from(Span::styled(*label, self.theme.secondary())),
                    Line::from(Span::styled(
                        value.clone(),
                        Style::default()
                            .fg(self.theme.text_primary)
                            .add_modifier(Modifier::BOLD),
                    )),
                ])
                .alignment(Alignment::Center)
                .render(inner, buf);
            }
        }
    }

    fn render_care(&self, area: Rect, buf: &mut Buffer) {
        let block = card(self.theme, false).title(Line::from(vec![
            Span::styled(
                format!(" {} ", theme::glyph(Icon::Droplet)),
                Style::default().fg(self.theme.brand_light),
            ),
            Span::styled(
                "Care Information ",
                Style::default()
                    .fg(self.theme.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        Paragraph::new(Span::styled(CARE_TEXT, self.theme.secondary()))
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let [water, _, history] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Paragraph::new(Span::styled("Water Now", self.theme.button()))
            .alignment(Alignment::Center)
            .style(self.theme.button())
            .render(water, buf);
        Paragraph::new(Span::styled("View History", self.theme.button_outline()))
            .alignment(Alignment::Center)
            .render(history, buf);
    }
}

impl<'a> Widget for PlantDetailScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [header, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);
        self.render_header(header, buf);

        let Some(plant) = self.plant else {
            Paragraph::new(Span::styled("Plant not found.", self.theme.muted()))
                .render(body, buf);
            return;
        };

        let [image, name, scientific, _, metrics, care, buttons] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .areas(body);

        Paragraph::new(vec![Line::from(""), Line::from(plant.image.as_str())])
            .alignment(Alignment::Center)
            .render(image, buf);
        Paragraph::new(Span::styled(plant.name.as_str(), self.theme.title())).render(name, buf);
        Paragraph::new(Span::styled(
            plant.scientific_name.as_str(),
            self.theme.secondary().add_modifier(Modifier::ITALIC),
        ))
        .render(scientific, buf);

        self.render_metrics(plant, metrics, buf);
        self.render_care(care, buf);
        self.render_buttons(buttons, buf);
    }
}
