//! Viewport observation: size classification and pointer hit-testing.

use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// One card at a time with previous/next navigation.
    Carousel,
    /// Fixed grid of cards.
    Grid,
}

impl LayoutMode {
    /// Below the breakpoint is the carousel; at or above it the grid.
    pub fn classify(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px < breakpoint_px {
            LayoutMode::Carousel
        } else {
            LayoutMode::Grid
        }
    }

    pub fn is_compact(self) -> bool {
        self == LayoutMode::Carousel
    }
}

/// Terminal size in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub columns: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(columns: u16, rows: u16) -> Self {
        Self { columns, rows }
    }

    pub fn width_px(&self, cell_width_px: u32) -> u32 {
        u32::from(self.columns) * cell_width_px
    }

    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.columns, self.rows)
    }
}

/// True when the pointer cell lies outside `area`.
pub fn is_outside(area: Rect, column: u16, row: u16) -> bool {
    column < area.x || column >= area.right() || row < area.y || row >= area.bottom()
}
