//! Badge colors per Pokemon type

use ratatui::style::Color;

/// Used for any type name not in [`TYPE_COLORS`].
pub const FALLBACK_TYPE_COLOR: Color = Color::Rgb(156, 163, 175);

pub const TYPE_COLORS: [(&str, Color); 18] = [
    ("normal", Color::Rgb(156, 163, 175)),
    ("fire", Color::Rgb(239, 68, 68)),
    ("water", Color::Rgb(59, 130, 246)),
    ("electric", Color::Rgb(250, 204, 21)),
    ("grass", Color::Rgb(34, 197, 94)),
    ("ice", Color::Rgb(191, 219, 254)),
    ("fighting", Color::Rgb(185, 28, 28)),
    ("poison", Color::Rgb(168, 85, 247)),
    ("ground", Color::Rgb(202, 138, 4)),
    ("flying", Color::Rgb(129, 140, 248)),
    ("psychic", Color::Rgb(236, 72, 153)),
    ("bug", Color::Rgb(22, 163, 74)),
    ("rock", Color::Rgb(133, 77, 14)),
    ("ghost", Color::Rgb(126, 34, 206)),
    ("dragon", Color::Rgb(67, 56, 202)),
    ("dark", Color::Rgb(31, 41, 55)),
    ("steel", Color::Rgb(107, 114, 128)),
    ("fairy", Color::Rgb(244, 114, 182)),
];

pub fn color_for(type_name: &str) -> Color {
    TYPE_COLORS
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_TYPE_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_types_map_to_their_color() {
        assert_eq!(color_for("fire"), Color::Rgb(239, 68, 68));
        assert_eq!(color_for("ghost"), Color::Rgb(126, 34, 206));
        assert_eq!(color_for("fairy"), Color::Rgb(244, 114, 182));
    }

    #[test]
    fn test_unknown_types_fall_back() {
        assert_eq!(color_for("shadow"), FALLBACK_TYPE_COLOR);
        assert_eq!(color_for("unknown"), FALLBACK_TYPE_COLOR);
        assert_eq!(color_for(""), FALLBACK_TYPE_COLOR);
        // lookup is exact
        assert_eq!(color_for("Fire"), FALLBACK_TYPE_COLOR);
    }

    #[test]
    fn test_every_table_entry_resolves() {
        for (name, color) in TYPE_COLORS {
            assert_eq!(color_for(name), color, "{name}");
        }
    }
}
