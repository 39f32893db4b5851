use ratatui::Frame;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;
use crate::session::tracker::SessionState;
use crate::ui::components::mode_selector::ModeSelector;
use crate::ui::components::progress_bar::ProgressBar;
use crate::ui::components::result_panel::ResultPanel;
use crate::ui::components::target_view::TargetView;
use crate::ui::components::typed_field::TypedField;
use crate::ui::layout::{AppLayout, pack_hint_lines};

const HINTS: &[&str] = &["[Tab/\u{2192}] Next mode", "[F1-F3] Pick mode", "[Esc] Quit"];

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;
    let session = &app.session;
    let layout = AppLayout::new(area, app.last_result.is_some());

    let status = match session.state() {
        SessionState::NotStarted => "ready".to_string(),
        SessionState::InProgress => format!(
            "{:.0}s | {} mistakes",
            session.elapsed_secs(),
            session.mistakes()
        ),
        SessionState::Completed => "done".to_string(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " homerow ",
            Style::default()
                .fg(colors.header_fg.color())
                .bg(colors.header_bg.color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} | {status}", session.mode().label()),
            Style::default()
                .fg(colors.text_pending.color())
                .bg(colors.header_bg.color()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg.color()));
    frame.render_widget(header, layout.header);

    frame.render_widget(ModeSelector::new(session.mode(), &app.theme), layout.selector);
    frame.render_widget(TargetView::new(session, &app.theme), layout.target);
    frame.render_widget(
        ProgressBar::new(session.position(), session.target().len(), &app.theme),
        layout.progress,
    );
    frame.render_widget(TypedField::new(session.typed_text(), &app.theme), layout.typed);

    if let (Some(result), Some(result_area)) = (&app.last_result, layout.result) {
        frame.render_widget(ResultPanel::new(result, &app.theme), result_area);
    }

    let hint = pack_hint_lines(HINTS, layout.footer.width as usize)
        .into_iter()
        .next()
        .unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(colors.text_pending.color()),
    )));
    frame.render_widget(footer, layout.footer);
}
