use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PracticeMode {
    #[default]
    SingleKeys,
    Combination,
    Paragraph,
}

impl PracticeMode {
    pub const ALL: [PracticeMode; 3] = [
        PracticeMode::SingleKeys,
        PracticeMode::Combination,
        PracticeMode::Paragraph,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PracticeMode::SingleKeys => "single-keys",
            PracticeMode::Combination => "combination",
            PracticeMode::Paragraph => "paragraph",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PracticeMode::SingleKeys => "Single Keys",
            PracticeMode::Combination => "Word Combinations",
            PracticeMode::Paragraph => "Paragraph",
        }
    }

    /// Single keys and combinations accept either case; paragraphs must match exactly.
    pub fn is_case_sensitive(self) -> bool {
        matches!(self, PracticeMode::Paragraph)
    }

    pub fn index(self) -> usize {
        match self {
            PracticeMode::SingleKeys => 0,
            PracticeMode::Combination => 1,
            PracticeMode::Paragraph => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for PracticeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PracticeMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(PracticeMode::Paragraph.next(), PracticeMode::SingleKeys);
        assert_eq!(PracticeMode::SingleKeys.prev(), PracticeMode::Paragraph);
        assert_eq!(PracticeMode::SingleKeys.next(), PracticeMode::Combination);
    }

    #[test]
    fn test_parse_kebab_names() {
        assert_eq!("single-keys".parse::<PracticeMode>().unwrap(), PracticeMode::SingleKeys);
        assert_eq!("paragraph".parse::<PracticeMode>().unwrap(), PracticeMode::Paragraph);
        assert!(matches!(
            "words".parse::<PracticeMode>(),
            Err(ConfigError::UnknownMode(name)) if name == "words"
        ));
    }

    #[test]
    fn test_only_paragraph_is_case_sensitive() {
        assert!(!PracticeMode::SingleKeys.is_case_sensitive());
        assert!(!PracticeMode::Combination.is_case_sensitive());
        assert!(PracticeMode::Paragraph.is_case_sensitive());
    }
}
