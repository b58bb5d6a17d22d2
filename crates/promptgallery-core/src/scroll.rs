//! Scroll-driven header and back-to-top visibility.

/// Movements smaller than this are ignored to prevent jitter
pub const SCROLL_JITTER_THRESHOLD: f64 = 10.0;

/// The header only hides once scrolled past this offset
pub const HEADER_HIDE_OFFSET: f64 = 100.0;

/// Back-to-top appears past this offset
pub const BACK_TO_TOP_OFFSET: f64 = 500.0;

/// Smart sticky header: hides while scrolling down, shows on the way up.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderTracker {
    last_y: f64,
    hidden: bool,
}

impl HeaderTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed the current scroll offset; returns whether the header is hidden.
    pub fn on_scroll(&mut self, y: f64) -> bool {
        if (y - self.last_y).abs() < SCROLL_JITTER_THRESHOLD {
            return self.hidden;
        }
        self.hidden = y > self.last_y && y > HEADER_HIDE_OFFSET;
        self.last_y = y;
        self.hidden
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Whether the back-to-top control is shown at offset `y`
pub fn back_to_top_visible(y: f64) -> bool {
    y > BACK_TO_TOP_OFFSET
}
