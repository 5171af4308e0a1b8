//! Visibility of the floating newsletter banner.

/// Scroll position of the page. Units are whatever the caller measures in
/// (terminal rows for the UI).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub offset: u32,
    pub viewport: u32,
    pub document: u32,
}

impl ScrollMetrics {
    /// True once the bottom of the viewport is within `threshold` of the end
    /// of the document.
    pub fn near_bottom(&self, threshold: u32) -> bool {
        self.offset + self.viewport >= self.document.saturating_sub(threshold)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Banner {
    visible: bool,
}

impl Banner {
    pub fn new() -> Self {
        Self { visible: true }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Recompute on a scroll event. Overrides an earlier dismissal.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, threshold: u32) {
        self.visible = !metrics.near_bottom(threshold);
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

impl Default for Banner {
    fn default() -> Self {
        Self::new()
    }
}
