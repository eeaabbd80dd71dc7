//! Question input widget.
//!
//! A single-line text field with cursor support. The panel title doubles
//! as the submit control's label, switching to a busy label while a
//! question is in flight.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Calculates the scroll offset needed to keep the cursor visible.
pub fn calculate_scroll_offset(cursor: usize, available_width: usize) -> usize {
    if cursor <= available_width {
        0
    } else {
        cursor.saturating_sub(available_width)
    }
}

/// Question input widget.
pub struct QuestionInput<'a> {
    text: &'a str,
    cursor: usize,
    focused: bool,
    loading: bool,
}

impl<'a> QuestionInput<'a> {
    /// Creates a new question input widget.
    pub fn new(text: &'a str, cursor: usize, focused: bool, loading: bool) -> Self {
        Self {
            text,
            cursor,
            focused,
            loading,
        }
    }
}

impl Widget for QuestionInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let title = if self.loading {
            " Question (Running...) "
        } else {
            " Question (Enter to run) "
        };
        let title_style = if self.loading {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            border_style
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(Span::styled(title, title_style));

        let inner_width = area.width.saturating_sub(4) as usize; // borders + prompt
        let offset = calculate_scroll_offset(self.cursor, inner_width);
        let visible: String = self.text.chars().skip(offset).collect();

        let line = Line::from(vec![
            Span::styled(
                "> ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(visible),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_offset() {
        assert_eq!(calculate_scroll_offset(5, 40), 0);
        assert_eq!(calculate_scroll_offset(40, 40), 0);
        assert_eq!(calculate_scroll_offset(50, 40), 10);
    }

    #[test]
    fn test_renders_prompt_and_text() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 40, 3));
        QuestionInput::new("top sellers?", 12, true, false).render(buf.area, &mut buf);

        let row: String = (0..40).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert!(row.contains("> top sellers?"));
    }
}
