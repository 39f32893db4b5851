use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::mode::PracticeMode;
use crate::session::tracker::TypingSession;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionResult {
    pub mode: PracticeMode,
    /// `None` when the first and last correct keystrokes landed at the same instant.
    pub keys_per_minute: Option<u32>,
    pub typed_chars: usize,
    pub attempts: usize,
    pub mistakes: usize,
    pub accuracy: f64,
    pub elapsed_secs: f64,
    pub completed_at: DateTime<Utc>,
}

impl SessionResult {
    pub fn from_session(session: &TypingSession) -> Option<Self> {
        if !session.is_complete() {
            return None;
        }
        Some(Self {
            mode: session.mode(),
            keys_per_minute: session.typing_speed(),
            typed_chars: session.typed_text().chars().count(),
            attempts: session.attempts(),
            mistakes: session.mistakes(),
            accuracy: session.accuracy(),
            elapsed_secs: session.elapsed_secs(),
            completed_at: Utc::now(),
        })
    }

    pub fn speed_line(&self) -> String {
        match self.keys_per_minute {
            Some(kpm) => format!("Typing speed: {kpm} keys per minute"),
            None => "Typing speed: - keys per minute".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;
    use crate::session::target::PracticeTargets;

    #[test]
    fn test_no_result_before_completion() {
        let targets = PracticeTargets::new("ab", "q", "x");
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets);
        assert!(SessionResult::from_session(&session).is_none());
        session.press_key('a');
        assert!(SessionResult::from_session(&session).is_none());
    }

    #[test]
    fn test_result_summarizes_completed_session() {
        let targets = PracticeTargets::new("ab", "q", "x");
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets);
        let t0 = Instant::now();
        session.press_key_at('a', t0);
        session.press_key_at('j', t0 + Duration::from_millis(300));
        session.press_key_at('b', t0 + Duration::from_millis(500));

        let result = SessionResult::from_session(&session).unwrap();
        assert_eq!(result.mode, PracticeMode::SingleKeys);
        assert_eq!(result.keys_per_minute, Some(240));
        assert_eq!(result.typed_chars, 2);
        assert_eq!(result.attempts, 3);
        assert_eq!(result.mistakes, 1);
        assert_eq!(result.speed_line(), "Typing speed: 240 keys per minute");
    }

    #[test]
    fn test_result_serializes_mode_in_kebab_case() {
        let targets = PracticeTargets::new("a", "q", "x");
        let mut session = TypingSession::new(PracticeMode::SingleKeys, &targets);
        session.press_key('a');
        let result = SessionResult::from_session(&session).unwrap();
        assert_eq!(result.speed_line(), "Typing speed: - keys per minute");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "single-keys");
        assert!(json["keys_per_minute"].is_null());
    }
}
