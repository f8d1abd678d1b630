//! # Tile Layout
//!
//! Column math for the participant tile grid and the split-view breakpoint.
//!
//! ```text
//! ┌──────────────┬──────────────────────────────────────────┐
//! │ Course list  │  ┌──────┐  ┌──────┐  ┌──────┐  ┌──────┐  │
//! │ (left pane)  │  │ tile │  │ tile │  │ tile │  │ tile │  │
//! │              │  └──────┘  └──────┘  └──────┘  └──────┘  │
//! │ shown only   │  |<-100->|<20>                            │
//! │ on large     │                                          │
//! │ screens      │  columns = floor(width / (tile + gutter))│
//! └──────────────┴──────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: f64 = 100.0;

/// Default margin plus padding around each tile, in pixels.
pub const DEFAULT_TILE_GUTTER: f64 = 20.0;

/// Window width at which the course list is shown next to the tiles.
pub const DEFAULT_LARGE_SCREEN_MIN_WIDTH: f64 = 768.0;

/// Tile geometry used to derive the number of grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileLayout {
    pub tile_size: f64,
    pub tile_gutter: f64,
    pub large_screen_min_width: f64,
}

impl Default for TileLayout {
    fn default() -> Self {
        TileLayout {
            tile_size: DEFAULT_TILE_SIZE,
            tile_gutter: DEFAULT_TILE_GUTTER,
            large_screen_min_width: DEFAULT_LARGE_SCREEN_MIN_WIDTH,
        }
    }
}

impl TileLayout {
    /// Number of tile columns that fit in a pane of `width` pixels.
    ///
    /// Never returns zero: a pane narrower than one tile still renders a
    /// single column.
    pub fn columns_for_width(&self, width: f64) -> u32 {
        let slot = self.tile_size + self.tile_gutter;
        if slot <= 0.0 || !width.is_finite() {
            return 1;
        }
        ((width / slot).floor() as u32).max(1)
    }

    /// Whether a window is wide enough for the split view.
    pub fn is_large_screen(&self, window_width: f64) -> bool {
        window_width >= self.large_screen_min_width
    }

    /// Whether the course list pane is rendered.
    pub fn shows_course_pane(&self, window_width: f64, pane_visible: bool) -> bool {
        pane_visible && self.is_large_screen(window_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        let layout = TileLayout::default();
        assert_eq!(layout.columns_for_width(120.0), 1);
        assert_eq!(layout.columns_for_width(239.9), 1);
        assert_eq!(layout.columns_for_width(240.0), 2);
        assert_eq!(layout.columns_for_width(1024.0), 8);
    }

    #[test]
    fn test_narrow_pane_keeps_one_column() {
        let layout = TileLayout::default();
        assert_eq!(layout.columns_for_width(0.0), 1);
        assert_eq!(layout.columns_for_width(50.0), 1);
    }

    #[test]
    fn test_custom_tiles() {
        let layout = TileLayout {
            tile_size: 60.0,
            tile_gutter: 0.0,
            ..TileLayout::default()
        };
        assert_eq!(layout.columns_for_width(360.0), 6);
    }

    #[test]
    fn test_large_screen_breakpoint() {
        let layout = TileLayout::default();
        assert!(!layout.is_large_screen(767.0));
        assert!(layout.is_large_screen(768.0));

        assert!(layout.shows_course_pane(1024.0, true));
        assert!(!layout.shows_course_pane(1024.0, false));
        assert!(!layout.shows_course_pane(400.0, true));
    }
}
