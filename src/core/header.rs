// Scroll-direction aware header.
//
// The header hides while the page scrolls down past a minimum offset and
// reappears on any upward movement. With a zero threshold this degrades to
// pure direction tracking.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

#[derive(Clone, Debug)]
pub struct HeaderTracker {
    last_scroll_top: f64,
    threshold: f64,
}

impl HeaderTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            last_scroll_top: 0.0,
            threshold: threshold.max(0.0),
        }
    }

    pub fn on_scroll(&mut self, offset: f64) -> HeaderVisibility {
        let offset = if offset.is_finite() { offset.max(0.0) } else { 0.0 };
        let visibility = if offset > self.last_scroll_top && offset > self.threshold {
            HeaderVisibility::Hidden
        } else {
            HeaderVisibility::Shown
        };
        self.last_scroll_top = offset;
        visibility
    }
}
