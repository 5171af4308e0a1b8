//! Geometry of the screen and of the scrollable page.
//!
//! The page is laid out in document coordinates (row 0 is the top of the
//! header) and later copied into the screen at the current scroll offset.
//! Overlays (dropdown, banner, menu) are placed in screen coordinates.

use crate::app::viewport::LayoutMode;
use crate::catalog::CATEGORIES;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub const HEADER_HEIGHT_GRID: u16 = 8;
pub const HEADER_HEIGHT_CAROUSEL: u16 = 6;
pub const CONTROL_HEIGHT: u16 = 3;
pub const CARD_HEIGHT: u16 = 9;
pub const CAROUSEL_HEIGHT: u16 = 13;
pub const EMPTY_TOOLS_HEIGHT: u16 = 5;
pub const NEWSLETTER_HEIGHT: u16 = 9;
pub const BANNER_HEIGHT: u16 = 5;
pub const DROPDOWN_WIDTH: u16 = 34;
pub const CARD_MIN_WIDTH: u16 = 32;

pub struct ScreenLayout {
    pub page: Rect,
    pub status_bar: Rect,
}

pub fn compute_screen(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Page
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenLayout {
        page: chunks[0],
        status_bar: chunks[1],
    }
}

/// Section rectangles in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub header: Rect,
    pub categories: Rect,
    pub sort_toggle: Rect,
    pub tools: Rect,
    pub newsletter: Rect,
    pub height: u16,
}

pub fn grid_columns(width: u16) -> u16 {
    (width / CARD_MIN_WIDTH).clamp(2, 4)
}

pub fn compute_page(width: u16, mode: LayoutMode, cards: usize) -> PageLayout {
    let header_h = match mode {
        LayoutMode::Grid => HEADER_HEIGHT_GRID,
        LayoutMode::Carousel => HEADER_HEIGHT_CAROUSEL,
    };
    let tools_h = match (mode, cards) {
        (_, 0) => EMPTY_TOOLS_HEIGHT,
        (LayoutMode::Grid, n) => {
            let cols = usize::from(grid_columns(width));
            let rows = u16::try_from(n.div_ceil(cols)).unwrap_or(u16::MAX / CARD_HEIGHT);
            1 + rows * CARD_HEIGHT
        }
        (LayoutMode::Carousel, _) => CAROUSEL_HEIGHT,
    };

    let mut y = 0u16;
    let mut section = |height: u16| {
        let rect = Rect::new(0, y, width, height);
        y = y.saturating_add(height);
        rect
    };
    let header = section(header_h);
    let categories = section(CONTROL_HEIGHT);
    let sort_toggle = section(CONTROL_HEIGHT);
    let tools = section(tools_h);
    let newsletter = section(NEWSLETTER_HEIGHT);

    PageLayout {
        header,
        categories,
        sort_toggle,
        tools,
        newsletter,
        height: newsletter.bottom(),
    }
}

/// Labels for the category bar: full names when they fit, compact otherwise.
pub fn category_labels(width: u16) -> Vec<&'static str> {
    let full: Vec<&str> = CATEGORIES.iter().map(|c| c.label(false)).collect();
    if segments_width(&full) + 2 <= width {
        full
    } else {
        CATEGORIES.iter().map(|c| c.label(true)).collect()
    }
}

/// Width of a segmented row: each label padded by one column per side, with
/// a one-column separator between segments.
pub fn segments_width(labels: &[&str]) -> u16 {
    let cells: usize = labels.iter().map(|l| l.width() + 2).sum();
    u16::try_from(cells + labels.len().saturating_sub(1)).unwrap_or(u16::MAX)
}

/// Index of the segment under `column` in a segmented row centered in
/// `inner`.
pub fn segment_at(labels: &[&str], inner: Rect, column: u16) -> Option<usize> {
    let mut x = inner.x + inner.width.saturating_sub(segments_width(labels)) / 2;
    for (i, label) in labels.iter().enumerate() {
        let w = u16::try_from(label.width() + 2).unwrap_or(u16::MAX);
        if column >= x && column < x.saturating_add(w) {
            return Some(i);
        }
        x = x.saturating_add(w + 1);
    }
    None
}

/// Card rectangles of the grid, below the one-row section title.
pub fn grid_cells(area: Rect, count: usize) -> Vec<Rect> {
    let cols = grid_columns(area.width);
    let cell_w = area.width / cols;
    (0..count)
        .map_while(|i| {
            let i = u16::try_from(i).ok()?;
            let x = area.x + (i % cols) * cell_w;
            let y = area.y + 1 + (i / cols) * CARD_HEIGHT;
            Some(Rect::new(x, y, cell_w, CARD_HEIGHT))
        })
        .filter(|r| r.bottom() <= area.bottom())
        .collect()
}

/// Screen rectangle of the open category dropdown, hanging below the
/// category control.
pub fn dropdown_area(categories: Rect, scroll: u16, page: Rect) -> Rect {
    let width = DROPDOWN_WIDTH.min(page.width);
    let height = CATEGORIES.len() as u16 + 2;
    let x = page.x + categories.x + categories.width.saturating_sub(width) / 2;
    let y = page.y + categories.bottom().saturating_sub(scroll);
    Rect::new(x, y, width, height).intersection(page)
}

/// Category index under `row` inside the dropdown, if any.
pub fn dropdown_row(area: Rect, row: u16) -> Option<usize> {
    if row <= area.y || row + 1 >= area.bottom() {
        return None;
    }
    let idx = usize::from(row - area.y - 1);
    (idx < CATEGORIES.len()).then_some(idx)
}

/// The floating banner occupies the bottom rows of the page area.
pub fn banner_area(page: Rect) -> Rect {
    let height = BANNER_HEIGHT.min(page.height);
    Rect::new(page.x, page.bottom() - height, page.width, height)
}

/// The `[x]` close control on the banner's top border.
pub fn banner_close_area(banner: Rect) -> Rect {
    Rect::new(banner.right().saturating_sub(5), banner.y, 3, 1).intersection(banner)
}

/// Centered popup near the top of `area`.
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width.saturating_sub(2));
    let h = height.min(area.height);
    let x = area.x + area.width.saturating_sub(w) / 2;
    let y = area.y + (area.height.saturating_sub(h) / 4).min(2);
    Rect::new(x, y, w, h)
}
