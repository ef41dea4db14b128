/// Icon shown on the mobile menu button. The two glyphs are mutually
/// exclusive and follow the open state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavGlyph {
    Bars,
    Times,
}

impl NavGlyph {
    #[inline]
    pub fn class_name(self) -> &'static str {
        match self {
            NavGlyph::Bars => "fa-bars",
            NavGlyph::Times => "fa-times",
        }
    }

    #[inline]
    pub fn other(self) -> NavGlyph {
        match self {
            NavGlyph::Bars => NavGlyph::Times,
            NavGlyph::Times => NavGlyph::Bars,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    open: bool,
}

impl NavState {
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[inline]
    pub fn glyph(&self) -> NavGlyph {
        if self.open {
            NavGlyph::Times
        } else {
            NavGlyph::Bars
        }
    }

    pub fn toggle_menu(&mut self) -> NavGlyph {
        self.open = !self.open;
        self.glyph()
    }

    // Forced regardless of prior state.
    pub fn close_menu(&mut self) -> NavGlyph {
        self.open = false;
        NavGlyph::Bars
    }
}
