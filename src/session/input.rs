use std::time::Instant;

use crate::session::mode::PracticeMode;

/// Control characters the host sends for non-printable keys. They never match a target.
pub const ENTER: char = '\n';
pub const BACKSPACE: char = '\u{8}';

#[derive(Clone, Debug)]
pub struct KeystrokeEvent {
    pub expected: char,
    pub actual: char,
    pub timestamp: Instant,
    pub correct: bool,
}

pub fn key_matches(mode: PracticeMode, actual: char, expected: char) -> bool {
    if mode.is_case_sensitive() {
        actual == expected
    } else {
        actual.to_lowercase().eq(std::iter::once(expected))
    }
}
