use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub header: Rect,
    pub selector: Rect,
    pub target: Rect,
    pub progress: Rect,
    pub typed: Rect,
    pub result: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    /// The result panel only takes space once a session has completed.
    pub fn new(area: Rect, show_result: bool) -> Self {
        let result_height = if show_result { 5 } else { 0 };
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(result_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: rows[0],
            selector: rows[1],
            target: rows[2],
            progress: rows[3],
            typed: rows[4],
            result: show_result.then_some(rows[5]),
            footer: rows[6],
        }
    }
}

/// Greedily pack key hints into as few lines as fit `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<String> = Vec::new();
    let mut current = String::from(" ");

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        let candidate = if current.trim().is_empty() {
            format!(" {hint}")
        } else {
            format!("{current}  {hint}")
        };
        if candidate.chars().count() <= width || current.trim().is_empty() {
            current = candidate;
        } else {
            out.push(current);
            current = format!(" {hint}");
        }
    }

    if !current.trim().is_empty() {
        out.push(current);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_hides_result_until_needed() {
        let area = Rect::new(0, 0, 80, 30);
        assert!(AppLayout::new(area, false).result.is_none());
        let layout = AppLayout::new(area, true);
        assert_eq!(layout.result.unwrap().height, 5);
        assert_eq!(layout.footer.y, 29);
    }

    #[test]
    fn test_hints_fit_on_one_line_when_wide() {
        let lines = pack_hint_lines(&["[Tab] Next mode", "[Esc] Quit"], 80);
        assert_eq!(lines, vec![" [Tab] Next mode  [Esc] Quit".to_string()]);
    }

    #[test]
    fn test_hints_wrap_when_narrow() {
        let lines = pack_hint_lines(&["[Tab] Next mode", "[Esc] Quit"], 18);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], " [Esc] Quit");
    }

    #[test]
    fn test_hints_empty_inputs() {
        assert!(pack_hint_lines(&[], 40).is_empty());
        assert!(pack_hint_lines(&["a"], 0).is_empty());
    }
}
