//! Test helpers for rendering widgets into a buffer

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

/// Render a widget and return each buffer row as a string.
pub fn render_lines<W: Widget>(widget: W, width: u16, height: u16) -> Vec<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    widget.render(area, &mut buf);
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buf.cell((x, y)).unwrap().symbol())
                .collect()
        })
        .collect()
}

/// Render a widget and return the whole buffer, rows joined by newlines.
pub fn render_text<W: Widget>(widget: W, width: u16, height: u16) -> String {
    render_lines(widget, width, height).join("\n")
}
