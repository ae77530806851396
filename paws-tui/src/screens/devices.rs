//! Devices tab: paired sensors and the Scan QR action.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use paws_core::domain::Device;
use paws_core::view::{self, Icon};

use crate::screens::{card, heading, scrolled};
use crate::theme::{self, Theme};

const DEVICE_HEIGHT: u16 = 5;

pub struct DevicesScreen<'a> {
    devices: &'a [Device],
    cursor: usize,
    theme: &'a Theme,
}

impl<'a> DevicesScreen<'a> {
    pub fn new(devices: &'a [Device], theme: &'a Theme) -> Self {
        Self {
            devices,
            cursor: 0,
            theme,
        }
    }

    /// Focus a device card; the list scrolls to keep it visible.
    pub fn focus(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    fn indicators(&self, device: &'a Device) -> Line<'a> {
        let battery = self.theme.tone(view::battery_tone(device.battery));
        let signal = self.theme.tone(view::signal_tone(&device.signal));
        Line::from(vec![
            Span::styled(theme::DOT, Style::default().fg(battery)),
            Span::styled(
                format!(" Battery: {}%", device.battery),
                self.theme.secondary(),
            ),
            Span::raw("    "),
            Span::styled(theme::DOT, Style::default().fg(signal)),
            Span::styled(format!(" Signal: {}", device.signal), self.theme.secondary()),
        ])
    }
}

impl<'a> Widget for DevicesScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [title, _, list] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let [title_text, scan_button] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(title);
        Paragraph::new(heading("Devices", self.theme)).render(title_text, buf);
        Paragraph::new(Line::from(Span::styled(
            format!(" {} Scan QR [s] ", theme::glyph(Icon::QrCode)),
            self.theme.button(),
        )))
        .alignment(Alignment::Right)
        .render(scan_button, buf);

        if self.devices.is_empty() {
            Paragraph::new(Span::styled("No devices paired.", self.theme.muted()))
                .render(list, buf);
            return;
        }

        for (index, row) in scrolled(list, DEVICE_HEIGHT, self.devices.len(), self.cursor) {
            let device = &self.devices[index];
            let block = card(self.theme, index == self.cursor);
            let inner = block.inner(row);
            block.render(row, buf);

            let [text, icon] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(3)]).areas(inner);
            Paragraph::new(vec![
                Line::from(Span::styled(
                    device.name.as_str(),
                    Style::default()
                        .fg(self.theme.text_primary)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("Connected to: {}", device.plant),
                    self.theme.secondary(),
                )),
                self.indicators(device),
            ])
            .render(text, buf);
            Paragraph::new(Span::styled(
                theme::glyph(Icon::Device),
                Style::default().fg(self.theme.brand_light),
            ))
            .render(icon, buf);
        }
    }
}
