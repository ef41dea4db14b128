// One-shot section reveal bookkeeping.
//
// Sections are only ever marked visible, never un-marked. Nothing is
// recorded until the tracker is activated, so intersections reported while
// the splash overlay covers the page are ignored.

#[derive(Clone, Debug)]
pub struct RevealTracker {
    visible: Vec<bool>,
    threshold: f64,
    active: bool,
}

impl RevealTracker {
    pub fn new(section_count: usize, threshold: f64) -> Self {
        Self {
            visible: vec![false; section_count],
            threshold: threshold.clamp(0.0, 1.0),
            active: false,
        }
    }

    /// Returns `true` on the first activation only.
    pub fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.active, true)
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Record an intersection report. Returns `true` when `index` becomes
    /// visible for the first time.
    pub fn observe(&mut self, index: usize, is_intersecting: bool, ratio: f64) -> bool {
        if !self.active || !is_intersecting || ratio < self.threshold {
            return false;
        }
        match self.visible.get_mut(index) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }
}
