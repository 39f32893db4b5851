use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::ui::theme::Theme;

/// Read-only echo of the accepted characters. Long text scrolls so the most
/// recent characters stay visible.
pub struct TypedField<'a> {
    text: &'a str,
    theme: &'a Theme,
}

impl<'a> TypedField<'a> {
    pub fn new(text: &'a str, theme: &'a Theme) -> Self {
        Self { text, theme }
    }
}

pub fn visible_tail(text: &str, width: usize) -> &str {
    let count = text.chars().count();
    if count <= width {
        return text;
    }
    let skip = count - width;
    match text.char_indices().nth(skip) {
        Some((byte_idx, _)) => &text[byte_idx..],
        None => "",
    }
}

impl Widget for TypedField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Typed ")
            .border_style(Style::default().fg(colors.border.color()))
            .style(Style::default().bg(colors.bg.color()));
        let inner = block.inner(area);
        block.render(area, buf);

        let shown = visible_tail(self.text, inner.width as usize);
        Paragraph::new(Line::from(Span::styled(
            shown,
            Style::default().fg(colors.fg.color()),
        )))
        .render(inner, buf);
    }
}
