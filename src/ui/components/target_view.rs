use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::mode::PracticeMode;
use crate::session::tracker::TypingSession;
use crate::ui::theme::Theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Highlight {
    Neutral,
    Correct,
    Incorrect,
}

/// Highlight for slot `idx`, read from the correctness log by attempt index.
pub fn attempt_highlight(correctness: &[bool], idx: usize) -> Highlight {
    match correctness.get(idx) {
        Some(true) => Highlight::Correct,
        Some(false) => Highlight::Incorrect,
        None => Highlight::Neutral,
    }
}

/// Highlight for paragraph character `idx`: typed characters are correct, and
/// the cursor turns incorrect after a rejected attempt.
pub fn position_highlight(session: &TypingSession, idx: usize) -> Highlight {
    if idx < session.position() {
        Highlight::Correct
    } else if idx == session.position() && session.last_attempt_correct() == Some(false) {
        Highlight::Incorrect
    } else {
        Highlight::Neutral
    }
}

pub fn prompt(mode: PracticeMode, target: &[char]) -> String {
    let text: String = target.iter().collect();
    match mode {
        PracticeMode::SingleKeys => format!("Type the following keys sequentially: {text}"),
        PracticeMode::Combination => {
            format!("Type the following word combinations sequentially: {text}")
        }
        PracticeMode::Paragraph => "Type the following paragraph:".to_string(),
    }
}

pub struct TargetView<'a> {
    session: &'a TypingSession,
    theme: &'a Theme,
}

impl<'a> TargetView<'a> {
    pub fn new(session: &'a TypingSession, theme: &'a Theme) -> Self {
        Self { session, theme }
    }

    fn style_for(&self, highlight: Highlight, is_cursor: bool) -> Style {
        let colors = &self.theme.colors;
        let style = match highlight {
            Highlight::Correct => Style::default()
                .fg(colors.text_correct.color())
                .bg(colors.text_correct_bg.color()),
            Highlight::Incorrect => Style::default()
                .fg(colors.text_incorrect.color())
                .bg(colors.text_incorrect_bg.color()),
            Highlight::Neutral if is_cursor => Style::default()
                .fg(colors.text_cursor_fg.color())
                .bg(colors.text_cursor_bg.color()),
            Highlight::Neutral => Style::default().fg(colors.fg.color()),
        };
        if is_cursor {
            style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            style
        }
    }

    fn single_key_line(&self) -> Line<'static> {
        let session = self.session;
        let spans: Vec<Span> = session
            .target()
            .iter()
            .enumerate()
            .flat_map(|(i, key)| {
                let highlight = attempt_highlight(session.correctness(), i);
                let style = self.style_for(highlight, i == session.position());
                [Span::styled(format!(" {key} "), style), Span::raw(" ")]
            })
            .collect();
        Line::from(spans)
    }

    /// The combination is one word, so it takes the highlight of attempt 0.
    fn combination_line(&self) -> Line<'static> {
        let session = self.session;
        let highlight = attempt_highlight(session.correctness(), 0);
        let spans: Vec<Span> = session
            .target()
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                Span::styled(ch.to_string(), self.style_for(highlight, i == session.position()))
            })
            .collect();
        Line::from(spans)
    }

    fn paragraph_line(&self) -> Line<'static> {
        let session = self.session;
        let colors = &self.theme.colors;
        let spans: Vec<Span> = session
            .target()
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                let is_cursor = i == session.position();
                let style = match position_highlight(session, i) {
                    Highlight::Correct => Style::default().fg(colors.success.color()),
                    Highlight::Neutral if !is_cursor => Style::default().fg(colors.text_pending.color()),
                    highlight => self.style_for(highlight, is_cursor),
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        Line::from(spans)
    }
}

impl Widget for TargetView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let mode = self.session.mode();

        let block = Block::bordered()
            .title(format!(" {} ", mode.label()))
            .border_style(Style::default().fg(colors.border.color()))
            .style(Style::default().bg(colors.bg.color()));
        let inner = block.inner(area);
        block.render(area, buf);

        let body = match mode {
            PracticeMode::SingleKeys => self.single_key_line(),
            PracticeMode::Combination => self.combination_line(),
            PracticeMode::Paragraph => self.paragraph_line(),
        };

        let lines = vec![
            Line::from(Span::styled(
                prompt(mode, self.session.target()),
                Style::default().fg(colors.fg.color()),
            )),
            Line::from(""),
            body,
        ];

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
