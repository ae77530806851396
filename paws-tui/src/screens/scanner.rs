//! QR scanner overlay. Nothing is decoded; the frame is a placeholder.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Paragraph, Widget},
};

use paws_core::view::Icon;

use crate::theme::{self, Theme};

const FRAME_WIDTH: u16 = 24;
const FRAME_HEIGHT: u16 = 12;

pub struct ScannerScreen<'a> {
    theme: &'a Theme,
}

impl<'a> ScannerScreen<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_frame(&self, area: Rect, buf: &mut Buffer) {
        let frame = Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(self.theme.brand_light));
        let inner = frame.inner(area);
        frame.render(area, buf);

        // Corner brackets inside the frame.
        let bracket = Style::default()
            .fg(self.theme.brand_light)
            .add_modifier(Modifier::BOLD);
        if inner.width >= 2 && inner.height >= 2 {
            let right = inner.right() - 1;
            let bottom = inner.bottom() - 1;
            buf.set_string(inner.x, inner.y, "┏", bracket);
            buf.set_string(right, inner.y, "┓", bracket);
            buf.set_string(inner.x, bottom, "┗", bracket);
            buf.set_string(right, bottom, "┛", bracket);
        }

        let [_, code, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);
        Paragraph::new(Span::styled(
            format!(" {} ", theme::glyph(Icon::QrCode).repeat(5)),
            Style::default().fg(self.theme.scanner_bg).bg(self.theme.text_primary),
        ))
        .alignment(Alignment::Center)
        .render(code, buf);
    }
}

impl<'a> Widget for ScannerScreen<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(self.theme.scanner_bg));

        let [header, body] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);
        Paragraph::new(Span::styled(
            theme::glyph(Icon::Back),
            Style::default().fg(self.theme.text_primary),
        ))
        .render(header, buf);

        let [_, prompt, _, frame_row, _, manual, _] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(FRAME_HEIGHT),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(body);

        Paragraph::new(Span::styled(
            "Scan QR code on your P.A.W.S device",
            Style::default()
                .fg(self.theme.text_primary)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center)
        .render(prompt, buf);

        let [frame] = Layout::horizontal([Constraint::Length(FRAME_WIDTH)])
            .flex(Flex::Center)
            .areas(frame_row);
        self.render_frame(frame, buf);

        Paragraph::new(Span::styled(
            "Enter manually",
            Style::default().fg(self.theme.text_primary),
        ))
        .alignment(Alignment::Center)
        .render(manual, buf);
    }
}
