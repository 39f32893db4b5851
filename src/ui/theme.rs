use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::warn;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

pub const DEFAULT_THEME: &str = "catppuccin-mocha";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: HexColor,
    pub fg: HexColor,
    pub text_correct: HexColor,
    pub text_correct_bg: HexColor,
    pub text_incorrect: HexColor,
    pub text_incorrect_bg: HexColor,
    pub text_pending: HexColor,
    pub text_cursor_bg: HexColor,
    pub text_cursor_fg: HexColor,
    pub accent: HexColor,
    pub border: HexColor,
    pub header_bg: HexColor,
    pub header_fg: HexColor,
    pub bar_filled: HexColor,
    pub bar_empty: HexColor,
    pub success: HexColor,
    pub warning: HexColor,
    pub error: HexColor,
}

/// A `#rrggbb` color. Anything unparseable renders as white rather than
/// rejecting the whole theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HexColor(pub Color);

impl HexColor {
    pub fn parse(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Self(Color::Rgb(r, g, b));
            }
        }
        Self(Color::White)
    }

    pub fn color(self) -> Color {
        self.0
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.0 {
            Color::Rgb(r, g, b) => serializer.serialize_str(&format!("#{r:02x}{g:02x}{b:02x}")),
            _ => serializer.serialize_str("#ffffff"),
        }
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl Theme {
    /// User themes in `<config_dir>/homerow/themes/` shadow the bundled ones.
    pub fn load(name: &str) -> Option<Self> {
        let filename = format!("{name}.toml");

        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir.join("homerow").join("themes").join(&filename);
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => warn!(path = %user_theme_path.display(), %err, "ignoring unreadable theme"),
                }
            }
        }

        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn load_or_default(name: &str) -> Self {
        Self::load(name).unwrap_or_else(|| {
            warn!(theme = name, "unknown theme, using default");
            Self::default()
        })
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load(DEFAULT_THEME).unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        let c = HexColor::parse;
        Self {
            bg: c("#1e1e2e"),
            fg: c("#cdd6f4"),
            text_correct: c("#1e1e2e"),
            text_correct_bg: c("#a6e3a1"),
            text_incorrect: c("#1e1e2e"),
            text_incorrect_bg: c("#f38ba8"),
            text_pending: c("#6c7086"),
            text_cursor_bg: c("#f5e0dc"),
            text_cursor_fg: c("#1e1e2e"),
            accent: c("#89b4fa"),
            border: c("#45475a"),
            header_bg: c("#313244"),
            header_fg: c("#cdd6f4"),
            bar_filled: c("#89b4fa"),
            bar_empty: c("#313244"),
            success: c("#a6e3a1"),
            warning: c("#f9e2af"),
            error: c("#f38ba8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(HexColor::parse("#ff8000").color(), Color::Rgb(255, 128, 0));
        assert_eq!(HexColor::parse("00ff00").color(), Color::Rgb(0, 255, 0));
        assert_eq!(HexColor::parse("#zzz").color(), Color::White);
        assert_eq!(HexColor::parse("#a\u{e9}123").color(), Color::White);
    }

    #[test]
    fn test_non_ascii_color_in_theme_file_falls_back() {
        #[derive(Deserialize)]
        struct Entry {
            bg: HexColor,
        }
        let entry: Entry = toml::from_str("bg = \"#a\u{e9}123\"").unwrap();
        assert_eq!(entry.bg.color(), Color::White);
    }

    #[test]
    fn test_bundled_themes_parse() {
        let names = Theme::available_themes();
        assert!(names.contains(&DEFAULT_THEME.to_string()));
        for name in names {
            let content = ThemeAssets::get(&format!("{name}.toml")).unwrap();
            let text = std::str::from_utf8(content.data.as_ref()).unwrap();
            let theme: Theme = toml::from_str(text).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        assert!(Theme::load("no-such-theme").is_none());
        let theme = Theme::load_or_default("no-such-theme");
        assert!(!theme.name.is_empty());
    }

    #[test]
    fn test_color_serializes_as_hex() {
        let colors = ThemeColors::default();
        let text = toml::to_string(&colors).unwrap();
        assert!(text.contains("bg = \"#1e1e2e\""));
    }
}
