//! Header widget for the TUI.
//!
//! Displays the application name, version, and backend URL.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Widget,
};

/// Header bar widget.
pub struct Header<'a> {
    backend_info: &'a str,
}

impl<'a> Header<'a> {
    /// Creates a new header widget.
    pub fn new(backend_info: &'a str) -> Self {
        Self { backend_info }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(style);
        }

        let left_text = format!(" askql v{}", env!("CARGO_PKG_VERSION"));
        let left_span = Span::styled(left_text, style);
        buf.set_span(area.x, area.y, &left_span, area.width);

        let right_text = format!(" [{}] ", self.backend_info);
        let right_width = right_text.len() as u16;
        if right_width < area.width {
            let right_x = area.right().saturating_sub(right_width);
            buf.set_string(right_x, area.y, &right_text, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_renders_backend_info() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 1));
        Header::new("http://localhost:8000").render(buf.area, &mut buf);

        let text: String = (0..60).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(text.contains("askql"));
        assert!(text.contains("http://localhost:8000"));
    }
}
