// Loading overlay sequencing.
//
// Reveal is one-way: once the page leaves `Loading`
// it never returns, and the caller activates the section observer only on
// the single transition.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SplashPhase {
    Loading,
    Revealed,
}

#[derive(Clone, Debug)]
pub struct SplashController {
    has_splash: bool,
    delay_ms: u32,
    phase: SplashPhase,
}

impl SplashController {
    pub fn new(has_splash: bool, delay_ms: u32) -> Self {
        Self {
            has_splash,
            delay_ms,
            phase: SplashPhase::Loading,
        }
    }

    #[inline]
    pub fn phase(&self) -> SplashPhase {
        self.phase
    }

    /// Timer to arm before revealing. `None` means reveal synchronously.
    #[inline]
    pub fn initial_delay(&self) -> Option<u32> {
        self.has_splash.then_some(self.delay_ms)
    }

    /// Move to `Revealed`. Returns `true` only on the transition itself.
    pub fn reveal(&mut self) -> bool {
        if self.phase == SplashPhase::Revealed {
            return false;
        }
        self.phase = SplashPhase::Revealed;
        true
    }
}
