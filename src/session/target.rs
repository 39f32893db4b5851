use rand::Rng;

use crate::config::Config;
use crate::generator::combination;
use crate::session::mode::PracticeMode;

pub const DEFAULT_SINGLE_KEYS: &str = "asdfjkl;";

pub const DEFAULT_PARAGRAPH: &str = "Touch typing is typing without looking at the keyboard. \
The fundamental idea is that each finger is given its own section of the keyboard and your \
fingers learn the location of the keyboard through practicing regularly and gaining muscle \
memory to eventually build up speed while typing.";

/// The three practice sequences. Built once at startup; the combination token
/// stays the same for the life of the process.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PracticeTargets {
    single_keys: Vec<char>,
    combination: Vec<char>,
    paragraph: Vec<char>,
}

impl PracticeTargets {
    pub fn new(single_keys: &str, combination: &str, paragraph: &str) -> Self {
        Self {
            single_keys: parse_single_keys(single_keys),
            combination: combination.chars().collect(),
            paragraph: normalize_paragraph(paragraph).chars().collect(),
        }
    }

    pub fn from_config<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        let token = combination::generate(rng, config.combination_length);
        Self::new(&config.single_keys, &token, &config.paragraph)
    }

    pub fn for_mode(&self, mode: PracticeMode) -> &[char] {
        match mode {
            PracticeMode::SingleKeys => &self.single_keys,
            PracticeMode::Combination => &self.combination,
            PracticeMode::Paragraph => &self.paragraph,
        }
    }

    pub fn combination(&self) -> String {
        self.combination.iter().collect()
    }
}

/// Keys may be written as "asdf" or "a s d f"; whitespace separates nothing meaningful.
/// Single-key input is lower-cased before matching, so the targets are too.
pub fn parse_single_keys(keys: &str) -> Vec<char> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collapse runs of whitespace (including newlines) into single spaces.
pub fn normalize_paragraph(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
