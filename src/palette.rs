//! Named display colors shared by every dashboard.

use ratatui::style::Color;

/// Semantic color buckets produced by the classifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Palette {
    Primary,
    Secondary,
    Danger,
    Warning,
    Success,
    Info,
    Caution,
    Neutral,
    Default,
}

impl Palette {
    /// Web hex value of the bucket.
    pub fn hex(self) -> &'static str {
        match self {
            Palette::Primary => "#2563eb",
            Palette::Secondary => "#475569",
            Palette::Danger => "#ef4444",
            Palette::Warning => "#f59e0b",
            Palette::Success => "#10b981",
            Palette::Info => "#0ea5e9",
            Palette::Caution => "#ffff00",
            Palette::Neutral => "#808080",
            Palette::Default => "#000000",
        }
    }

    /// Terminal color for the bucket.
    ///
    /// `Default` maps to the terminal's own foreground so it stays visible on
    /// dark backgrounds.
    pub fn color(self) -> Color {
        match self {
            Palette::Default => Color::Reset,
            other => other.hex().parse().unwrap_or(Color::Reset),
        }
    }
}

/// Series colors cycled through by multi-series charts and pie slices.
pub const SERIES: [Color; 7] = [
    Color::Rgb(0x00, 0x88, 0xfe),
    Color::Rgb(0x00, 0xc4, 0x9f),
    Color::Rgb(0xff, 0xbb, 0x28),
    Color::Rgb(0xff, 0x80, 0x42),
    Color::Rgb(0x88, 0x84, 0xd8),
    Color::Rgb(0x82, 0xca, 0x9d),
    Color::Rgb(0xff, 0xc6, 0x58),
];

/// Color of the `index`-th series, wrapping around the series list.
pub fn series_color(index: usize) -> Color {
    SERIES[index % SERIES.len()]
}

/// Blue used for "United States" / "Ukraine" series.
pub const BLUE: Color = Color::Rgb(0x3b, 0x82, 0xf6);
/// Lighter blue companion series.
pub const LIGHT_BLUE: Color = Color::Rgb(0x60, 0xa5, 0xfa);
/// Red used for "China" / "Russia" series.
pub const RED: Color = Color::Rgb(0xef, 0x44, 0x44);
/// Lighter red companion series.
pub const LIGHT_RED: Color = Color::Rgb(0xf8, 0x71, 0x71);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_hex_values_are_unique() {
        let hexes: HashSet<_> = Palette::iter().map(Palette::hex).collect();
        assert_eq!(hexes.len(), Palette::iter().count());
    }

    #[test]
    fn test_color_follows_hex() {
        assert_eq!(Palette::Danger.color(), Color::Rgb(0xef, 0x44, 0x44));
        assert_eq!(Palette::Caution.color(), Color::Rgb(0xff, 0xff, 0x00));
        assert_eq!(Palette::Default.color(), Color::Reset);
    }

    #[test]
    fn test_series_color_wraps() {
        assert_eq!(series_color(0), series_color(SERIES.len()));
        assert_ne!(series_color(0), series_color(1));
    }
}
