use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::info;

use crate::config::Config;
use crate::session::input::{BACKSPACE, ENTER, KeystrokeEvent};
use crate::session::mode::PracticeMode;
use crate::session::result::SessionResult;
use crate::session::target::PracticeTargets;
use crate::session::tracker::TypingSession;
use crate::ui::theme::Theme;

/// Top-level application context. Owns the practice targets so every session
/// built from them sees the same combination token.
pub struct App {
    pub config: Config,
    pub targets: PracticeTargets,
    pub theme: Theme,
    pub session: TypingSession,
    pub last_result: Option<SessionResult>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: Config, targets: PracticeTargets, theme: Theme) -> Self {
        let session = TypingSession::new(config.default_mode, &targets);
        Self {
            config,
            targets,
            theme,
            session,
            last_result: None,
            should_quit: false,
        }
    }

    pub fn mode(&self) -> PracticeMode {
        self.session.mode()
    }

    pub fn select_mode(&mut self, mode: PracticeMode) {
        info!(from = %self.session.mode(), to = %mode, "practice mode selected");
        self.session.change_mode(mode, &self.targets);
        self.last_result = None;
    }

    pub fn next_mode(&mut self) {
        self.select_mode(self.mode().next());
    }

    pub fn prev_mode(&mut self) {
        self.select_mode(self.mode().prev());
    }

    pub fn type_char(&mut self, ch: char) -> Option<KeystrokeEvent> {
        let was_complete = self.session.is_complete();
        let event = self.session.press_key(ch)?;
        if !was_complete && self.session.is_complete() {
            self.last_result = SessionResult::from_session(&self.session);
            if let Some(result) = &self.last_result {
                info!(
                    mode = %result.mode,
                    keys_per_minute = ?result.keys_per_minute,
                    attempts = result.attempts,
                    mistakes = result.mistakes,
                    elapsed_secs = result.elapsed_secs,
                    "session completed"
                );
            }
        }
        Some(event)
    }

    /// Route a key press. Mode and quit keys are handled here; everything else
    /// that carries a character is a keystroke attempt.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.should_quit = true;
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::Right => self.next_mode(),
            KeyCode::BackTab | KeyCode::Left => self.prev_mode(),
            KeyCode::F(n @ 1..=3) => self.select_mode(PracticeMode::ALL[n as usize - 1]),
            KeyCode::Char(ch) => {
                self.type_char(ch);
            }
            KeyCode::Enter => {
                self.type_char(ENTER);
            }
            KeyCode::Backspace => {
                self.type_char(BACKSPACE);
            }
            _ => {}
        }
    }
}
