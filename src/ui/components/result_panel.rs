use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::result::SessionResult;
use crate::ui::theme::Theme;

pub struct ResultPanel<'a> {
    pub result: &'a SessionResult,
    pub theme: &'a Theme,
}

impl<'a> ResultPanel<'a> {
    pub fn new(result: &'a SessionResult, theme: &'a Theme) -> Self {
        Self { result, theme }
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(" Complete ")
            .border_style(Style::default().fg(colors.accent.color()))
            .style(Style::default().bg(colors.bg.color()));
        let inner = block.inner(area);
        block.render(area, buf);

        let acc_color = if self.result.accuracy >= 95.0 {
            colors.success.color()
        } else if self.result.accuracy >= 85.0 {
            colors.warning.color()
        } else {
            colors.error.color()
        };

        let speed = Line::from(Span::styled(
            self.result.speed_line(),
            Style::default()
                .fg(colors.accent.color())
                .add_modifier(Modifier::BOLD),
        ));
        let detail = Line::from(vec![
            Span::styled(
                format!("Accuracy: {:.1}%", self.result.accuracy),
                Style::default().fg(acc_color),
            ),
            Span::styled(
                format!(
                    "  ({} keys, {} mistakes, {:.1}s)",
                    self.result.typed_chars, self.result.mistakes, self.result.elapsed_secs
                ),
                Style::default().fg(colors.text_pending.color()),
            ),
        ]);
        let help = Line::from(Span::styled(
            "Select a mode to practice again",
            Style::default().fg(colors.text_pending.color()),
        ));

        Paragraph::new(vec![speed, detail, help]).render(inner, buf);
    }
}
