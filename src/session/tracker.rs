use std::time::Instant;

use tracing::debug;

use crate::session::input::{self, KeystrokeEvent};
use crate::session::mode::PracticeMode;
use crate::session::target::PracticeTargets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    NotStarted,
    InProgress,
    Completed,
}

/// Keystroke matching state for one practice mode.
///
/// Only correct keystrokes advance `position` and extend `typed_text`, so the
/// two always agree. Every processed attempt, right or wrong, is appended to
/// the correctness log, which is indexed by attempt and can outgrow the
/// position.
#[derive(Clone, Debug)]
pub struct TypingSession {
    mode: PracticeMode,
    target: Vec<char>,
    position: usize,
    typed_text: String,
    correctness: Vec<bool>,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
}

impl TypingSession {
    pub fn new(mode: PracticeMode, targets: &PracticeTargets) -> Self {
        Self {
            mode,
            target: targets.for_mode(mode).to_vec(),
            position: 0,
            typed_text: String::new(),
            correctness: Vec::new(),
            started_at: None,
            finished_at: None,
        }
    }

    /// Switch to `mode` and discard all progress, even when the mode is unchanged.
    pub fn change_mode(&mut self, mode: PracticeMode, targets: &PracticeTargets) {
        *self = Self::new(mode, targets);
    }

    pub fn press_key(&mut self, key: char) -> Option<KeystrokeEvent> {
        self.press_key_at(key, Instant::now())
    }

    /// Process one key press observed at `now`. Returns `None` once the target
    /// is exhausted; later presses leave the session untouched.
    pub fn press_key_at(&mut self, key: char, now: Instant) -> Option<KeystrokeEvent> {
        let expected = self.expected()?;
        let correct = input::key_matches(self.mode, key, expected);

        self.correctness.push(correct);
        if correct {
            if self.position == 0 {
                self.started_at = Some(now);
            }
            self.typed_text.push(key);
            self.position += 1;
        }

        if self.position == self.target.len() && self.finished_at.is_none() {
            self.finished_at = Some(now);
        }

        debug!(mode = %self.mode, ?key, ?expected, correct, position = self.position, "keystroke");

        Some(KeystrokeEvent {
            expected,
            actual: key,
            timestamp: now,
            correct,
        })
    }

    /// Correct keystrokes per minute, available only after completion.
    pub fn typing_speed(&self) -> Option<u32> {
        let (start, end) = (self.started_at?, self.finished_at?);
        let elapsed = end.duration_since(start).as_secs_f64();
        if elapsed <= 0.0 {
            return None;
        }
        let chars = self.typed_text.chars().count() as f64;
        Some((chars / elapsed * 60.0).round() as u32)
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Completed
        } else if self.position == 0 {
            SessionState::NotStarted
        } else {
            SessionState::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.position >= self.target.len()
    }

    pub fn mode(&self) -> PracticeMode {
        self.mode
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn expected(&self) -> Option<char> {
        self.target.get(self.position).copied()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn typed_text(&self) -> &str {
        &self.typed_text
    }

    pub fn correctness(&self) -> &[bool] {
        &self.correctness
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn finished_at(&self) -> Option<Instant> {
        self.finished_at
    }

    pub fn attempts(&self) -> usize {
        self.correctness.len()
    }

    pub fn mistakes(&self) -> usize {
        self.correctness.iter().filter(|&&ok| !ok).count()
    }

    pub fn last_attempt_correct(&self) -> Option<bool> {
        self.correctness.last().copied()
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_secs_f64(),
            (Some(start), None) => start.elapsed().as_secs_f64(),
            _ => 0.0,
        }
    }

    pub fn accuracy(&self) -> f64 {
        let total = self.correctness.len();
        if total == 0 {
            return 100.0;
        }
        (total - self.mistakes()) as f64 / total as f64 * 100.0
    }

    pub fn progress(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        self.position as f64 / self.target.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn targets() -> PracticeTargets {
        PracticeTargets::new("a s d f j k l ;", "k3x9q", "Touch typing.")
    }

    fn type_all(session: &mut TypingSession, text: &str, start: Instant, step_ms: u64) {
        for (i, ch) in text.chars().enumerate() {
            session.press_key_at(ch, start + Duration::from_millis(step_ms * i as u64));
        }
    }

    #[test]
    fn test_new_session() {
        let session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        assert_eq!(session.target().len(), 8);
        assert_eq!(session.position(), 0);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert_eq!(session.expected(), Some('a'));
        assert_eq!(session.accuracy(), 100.0);
        assert_eq!(session.typing_speed(), None);
    }

    #[test]
    fn test_single_keys_scenario() {
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        let t0 = Instant::now();

        session.press_key_at('a', t0);
        assert_eq!(session.position(), 1);
        assert_eq!(session.typed_text(), "a");
        assert_eq!(session.correctness(), &[true]);

        session.press_key_at('x', t0);
        assert_eq!(session.position(), 1);
        assert_eq!(session.correctness(), &[true, false]);

        session.press_key_at('s', t0);
        assert_eq!(session.position(), 2);
        assert_eq!(session.typed_text(), "as");
        assert_eq!(session.correctness(), &[true, false, true]);
        assert_eq!(session.state(), SessionState::InProgress);
    }

    #[test]
    fn test_single_keys_accept_uppercase_and_keep_typed_case() {
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        let event = session.press_key('A').unwrap();
        assert!(event.correct);
        assert_eq!(event.expected, 'a');
        assert_eq!(session.typed_text(), "A");
    }

    #[test]
    fn test_paragraph_is_case_sensitive() {
        let mut session = TypingSession::new(PracticeMode::Paragraph, &targets());
        let t0 = Instant::now();
        session.press_key_at('t', t0);
        assert_eq!(session.position(), 0);
        assert_eq!(session.correctness(), &[false]);
        assert!(session.started_at().is_none());

        session.press_key_at('T', t0 + Duration::from_millis(50));
        assert_eq!(session.position(), 1);
        assert_eq!(session.started_at(), Some(t0 + Duration::from_millis(50)));
    }

    #[test]
    fn test_start_set_once_on_first_correct_key() {
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        let t0 = Instant::now();
        session.press_key_at('z', t0);
        assert!(session.started_at().is_none());
        session.press_key_at('a', t0 + Duration::from_secs(1));
        session.press_key_at('s', t0 + Duration::from_secs(2));
        assert_eq!(session.started_at(), Some(t0 + Duration::from_secs(1)));
    }

    #[test]
    fn test_completion_speed() {
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        let t0 = Instant::now();
        // 8 keys, last one lands 4.0s after the first.
        for (i, ch) in "asdfjkl;".chars().enumerate() {
            let at = if i == 7 {
                t0 + Duration::from_secs(4)
            } else {
                t0 + Duration::from_millis(400 * i as u64)
            };
            session.press_key_at(ch, at);
        }
        assert_eq!(session.state(), SessionState::Completed);
        assert_eq!(session.finished_at(), Some(t0 + Duration::from_secs(4)));
        assert_eq!(session.elapsed_secs(), 4.0);
        assert_eq!(session.typing_speed(), Some(120));
    }

    #[test]
    fn test_speed_rounds_to_nearest() {
        let mut session = TypingSession::new(PracticeMode::Combination, &targets());
        let t0 = Instant::now();
        // 5 chars over 3.5s -> 85.71 -> 86
        session.press_key_at('k', t0);
        session.press_key_at('3', t0 + Duration::from_millis(1000));
        session.press_key_at('x', t0 + Duration::from_millis(2000));
        session.press_key_at('9', t0 + Duration::from_millis(3000));
        session.press_key_at('q', t0 + Duration::from_millis(3500));
        assert_eq!(session.typing_speed(), Some(86));
    }

    #[test]
    fn test_presses_after_completion_are_ignored() {
        let mut session = TypingSession::new(PracticeMode::Combination, &targets());
        let t0 = Instant::now();
        type_all(&mut session, "k3x9q", t0, 100);
        let finished = session.finished_at();
        let attempts = session.attempts();

        assert!(session.press_key_at('z', t0 + Duration::from_secs(9)).is_none());
        assert!(session.press_key_at('k', t0 + Duration::from_secs(9)).is_none());
        assert_eq!(session.finished_at(), finished);
        assert_eq!(session.attempts(), attempts);
        assert_eq!(session.typed_text(), "k3x9q");
    }

    #[test]
    fn test_invariants_hold_on_every_press() {
        let mut session = TypingSession::new(PracticeMode::Paragraph, &targets());
        let t0 = Instant::now();
        let presses = "Tx\nouch\u{8} typin g.";
        for (i, ch) in presses.chars().enumerate() {
            let before = session.attempts();
            let done = session.is_complete();
            session.press_key_at(ch, t0 + Duration::from_millis(10 * i as u64));
            assert_eq!(session.typed_text().chars().count(), session.position());
            if !done {
                assert_eq!(session.attempts(), before + 1);
            }
        }
        assert!(session.is_complete());
        assert_eq!(session.typed_text(), "Touch typing.");
    }

    #[test]
    fn test_mode_change_resets_everything() {
        let t = targets();
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &t);
        type_all(&mut session, "asdfjkl;", Instant::now(), 10);
        assert!(session.is_complete());

        session.change_mode(PracticeMode::Paragraph, &t);
        assert_eq!(session.mode(), PracticeMode::Paragraph);
        assert_eq!(session.position(), 0);
        assert!(session.typed_text().is_empty());
        assert!(session.correctness().is_empty());
        assert!(session.started_at().is_none());
        assert!(session.finished_at().is_none());
        assert_eq!(session.expected(), Some('T'));
    }

    #[test]
    fn test_reselecting_same_mode_resets() {
        let t = targets();
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &t);
        session.press_key('a');
        session.change_mode(PracticeMode::SingleKeys, &t);
        assert_eq!(session.state(), SessionState::NotStarted);
        assert!(session.correctness().is_empty());
    }

    #[test]
    fn test_single_char_target_has_no_speed() {
        let t = PracticeTargets::new("a", "q", "x");
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &t);
        session.press_key_at('a', Instant::now());
        assert!(session.is_complete());
        assert!(session.started_at().is_some());
        assert_eq!(session.started_at(), session.finished_at());
        assert_eq!(session.typing_speed(), None);
    }

    #[test]
    fn test_accuracy_counts_attempts() {
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets());
        session.press_key('a');
        session.press_key('x');
        session.press_key('y');
        session.press_key('s');
        assert_eq!(session.mistakes(), 2);
        assert_eq!(session.accuracy(), 50.0);
        assert_eq!(session.last_attempt_correct(), Some(true));
        assert_eq!(session.progress(), 0.25);
    }
}
