//! Light/dark theme and the palette each one paints with

use ratatui::style::Color;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors the whole view is drawn with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub accent: Color,
    pub input_bg: Color,
}

const LIGHT: Palette = Palette {
    background: Color::Rgb(243, 244, 246),
    panel: Color::Rgb(255, 255, 255),
    text: Color::Rgb(31, 41, 55),
    text_dim: Color::Rgb(107, 114, 128),
    border: Color::Rgb(209, 213, 219),
    accent: Color::Rgb(59, 130, 246),
    input_bg: Color::Rgb(255, 255, 255),
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    panel: Color::Rgb(31, 41, 55),
    text: Color::Rgb(255, 255, 255),
    text_dim: Color::Rgb(156, 163, 175),
    border: Color::Rgb(75, 85, 99),
    accent: Color::Rgb(96, 165, 250),
    input_bg: Color::Rgb(31, 41, 55),
};

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn palette(&self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    /// Icon for the toggle button: the theme you would switch to.
    pub fn toggle_icon(&self) -> &'static str {
        match self {
            Theme::Light => "☾",
            Theme::Dark => "☀",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            Theme::Light => "dark",
            Theme::Dark => "light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let theme = Theme::default();
        assert_eq!(theme, Theme::Light);
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
        assert!(Theme::Dark.is_dark());
        assert!(!Theme::Light.is_dark());
    }

    #[test]
    fn test_toggle_icon_names_target_theme() {
        assert_eq!(Theme::Light.toggle_icon(), "☾");
        assert_eq!(Theme::Dark.toggle_icon(), "☀");
    }
}
