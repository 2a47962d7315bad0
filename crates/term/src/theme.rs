//! Color themes for the board and tiles.

use crate::fb::{CellStyle, Rgb};

/// Light or dark palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

/// Background and text color for one tile value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileColors {
    pub bg: Rgb,
    pub fg: Rgb,
}

const fn tc(bg: u32, fg: u32) -> TileColors {
    TileColors {
        bg: Rgb::hex(bg),
        fg: Rgb::hex(fg),
    }
}

// Index is log2(value) - 1, so 2 => 0 and 2048 => 10.
const LIGHT_TILES: [TileColors; 11] = [
    tc(0xeee4da, 0x776e65),
    tc(0xede0c8, 0x776e65),
    tc(0xf2b179, 0xf9f6f2),
    tc(0xf59563, 0xf9f6f2),
    tc(0xf67c5f, 0xf9f6f2),
    tc(0xf65e3b, 0xf9f6f2),
    tc(0xedcf72, 0xf9f6f2),
    tc(0xedcc61, 0xf9f6f2),
    tc(0xedc850, 0xf9f6f2),
    tc(0xedc53f, 0xf9f6f2),
    tc(0xedc22e, 0xf9f6f2),
];

const DARK_TILES: [TileColors; 11] = [
    tc(0x3d3d3d, 0xe8e8e8),
    tc(0x4a4a4a, 0xe8e8e8),
    tc(0x10b981, 0xffffff),
    tc(0x059669, 0xffffff),
    tc(0x047857, 0xffffff),
    tc(0x065f46, 0xffffff),
    tc(0x34d399, 0x064e3b),
    tc(0x6ee7b7, 0x064e3b),
    tc(0xa7f3d0, 0x064e3b),
    tc(0xd1fae5, 0x064e3b),
    tc(0xfbbf24, 0x064e3b),
];

// Tiles above 2048 share one color in both themes.
const BEYOND: TileColors = tc(0x10b981, 0xffffff);

impl Theme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Colors for a non-empty tile.
    ///
    /// ```
    /// use tui_2048_term::{Rgb, Theme};
    ///
    /// assert_eq!(Theme::Light.tile(2048).bg, Rgb::hex(0xedc22e));
    /// assert_eq!(Theme::Dark.tile(8).bg, Rgb::hex(0x10b981));
    /// ```
    pub fn tile(&self, value: u32) -> TileColors {
        let table = match self {
            Theme::Light => &LIGHT_TILES,
            Theme::Dark => &DARK_TILES,
        };
        if !value.is_power_of_two() {
            return BEYOND;
        }
        value
            .trailing_zeros()
            .checked_sub(1)
            .and_then(|idx| table.get(idx as usize).copied())
            .unwrap_or(BEYOND)
    }

    /// Terminal background around the board
    pub fn page(&self) -> CellStyle {
        match self {
            Theme::Light => CellStyle::new(Rgb::hex(0x1f2937), Rgb::hex(0xfefdfb)),
            Theme::Dark => CellStyle::new(Rgb::hex(0xffffff), Rgb::hex(0x111827)),
        }
    }

    /// Board frame and the gaps between tiles
    pub fn board(&self) -> CellStyle {
        match self {
            Theme::Light => CellStyle::new(Rgb::hex(0x776e65), Rgb::hex(0xd1d1d1)),
            Theme::Dark => CellStyle::new(Rgb::hex(0x9ca3af), Rgb::hex(0x374151)),
        }
    }

    /// An empty slot on the board
    pub fn empty_slot(&self) -> CellStyle {
        match self {
            Theme::Light => CellStyle::new(Rgb::hex(0xbdbdbd), Rgb::hex(0xe8e8e8)).dim(),
            Theme::Dark => CellStyle::new(Rgb::hex(0x6b7280), Rgb::hex(0x4b5563)).dim(),
        }
    }

    /// Side panel labels
    pub fn label(&self) -> CellStyle {
        self.page().bold()
    }

    /// Overlay banner text
    pub fn banner(&self) -> CellStyle {
        CellStyle::new(Rgb::hex(0xffffff), Rgb::hex(0x000000)).bold()
    }

    /// Highlight for records and the win banner
    pub fn accent(&self) -> CellStyle {
        CellStyle::new(Rgb::hex(0xfacc15), Rgb::hex(0x000000)).bold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_cover_two_through_2048() {
        for theme in [Theme::Light, Theme::Dark] {
            let mut v = 2u32;
            let mut seen = Vec::new();
            while v <= 2048 {
                seen.push(theme.tile(v).bg);
                v *= 2;
            }
            assert_eq!(seen.len(), 11);
            assert_ne!(seen[0], seen[10]);
        }
    }

    #[test]
    fn large_tiles_fall_back() {
        assert_eq!(Theme::Light.tile(4096), BEYOND);
        assert_eq!(Theme::Dark.tile(1 << 20), BEYOND);
    }

    #[test]
    fn malformed_values_fall_back() {
        for value in [0, 1, 3, 6, 12, 2047] {
            assert_eq!(Theme::Light.tile(value), BEYOND);
            assert_eq!(Theme::Dark.tile(value), BEYOND);
        }
    }

    #[test]
    fn parses_names() {
        assert_eq!(Theme::from_str("LIGHT"), Some(Theme::Light));
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("solarized"), None);
        assert_eq!(Theme::default().as_str(), "dark");
    }
}
