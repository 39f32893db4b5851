use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::mode::PracticeMode;
use crate::ui::theme::Theme;

/// Radio-style row with one entry per practice mode.
pub struct ModeSelector<'a> {
    pub selected: PracticeMode,
    pub theme: &'a Theme,
}

impl<'a> ModeSelector<'a> {
    pub fn new(selected: PracticeMode, theme: &'a Theme) -> Self {
        Self { selected, theme }
    }

    pub fn option_text(mode: PracticeMode, selected: bool) -> String {
        let mark = if selected { '\u{25c9}' } else { '\u{25cb}' };
        format!("[F{}] {mark} {}", mode.index() + 1, mode.label())
    }
}

impl Widget for ModeSelector<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Practice ")
            .border_style(Style::default().fg(colors.border.color()))
            .style(Style::default().bg(colors.bg.color()));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut spans = Vec::new();
        for mode in PracticeMode::ALL {
            let is_selected = mode == self.selected;
            let style = if is_selected {
                Style::default()
                    .fg(colors.accent.color())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_pending.color())
            };
            spans.push(Span::styled(Self::option_text(mode, is_selected), style));
            spans.push(Span::raw("   "));
        }

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
