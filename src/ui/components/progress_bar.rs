use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Widget};

use crate::ui::theme::Theme;

pub struct ProgressBar<'a> {
    pub done: usize,
    pub total: usize,
    pub theme: &'a Theme,
}

impl<'a> ProgressBar<'a> {
    pub fn new(done: usize, total: usize, theme: &'a Theme) -> Self {
        Self { done, total, theme }
    }

    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        (self.done as f64 / self.total as f64).clamp(0.0, 1.0)
    }
}

impl Widget for ProgressBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        let block = Block::bordered()
            .title(format!(" Progress {}/{} ", self.done, self.total))
            .border_style(Style::default().fg(colors.border.color()));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let ratio = self.ratio();
        let filled_width = (ratio * inner.width as f64) as u16;
        for x in inner.x..inner.x + inner.width {
            let bg = if x < inner.x + filled_width {
                colors.bar_filled.color()
            } else {
                colors.bar_empty.color()
            };
            buf[(x, inner.y)].set_style(Style::default().fg(colors.fg.color()).bg(bg));
        }

        let label = format!("{:.0}%", ratio * 100.0);
        let label_x = inner.x + (inner.width.saturating_sub(label.len() as u16)) / 2;
        buf.set_string(label_x, inner.y, &label, Style::default().fg(colors.fg.color()));
    }
}
