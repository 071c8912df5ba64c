//! Animation durations shared by the controller and the showcase.

use std::time::Duration;

/// Every fixed delay used by the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimings {
    /// Card fade-out before the account swap
    pub fade_out: Duration,
    /// Time after the swap before the card is idle again
    pub settle: Duration,
    /// Username/bio stay hidden this long whenever content is applied
    pub details_reveal: Duration,
    /// Wobble and pulse length
    pub effect: Duration,
    /// How long the `switching` class stays on after a switcher click
    pub switch_flash: Duration,
    /// Ripple lifetime
    pub ripple: Duration,
    /// Delay between consecutive card insertions
    pub stagger: Duration,
}

impl AnimationTimings {
    /// Full account-switch window (fade out plus settle)
    pub fn transition_window(&self) -> Duration {
        self.fade_out + self.settle
    }

    /// Insertion delay of the card at `index`
    pub fn stagger_for(&self, index: usize) -> Duration {
        self.stagger * index as u32
    }

    pub fn with_stagger(mut self, stagger: Duration) -> Self {
        self.stagger = stagger;
        self
    }
}

impl Default for AnimationTimings {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(300),
            settle: Duration::from_millis(300),
            details_reveal: Duration::from_millis(300),
            effect: Duration::from_millis(500),
            switch_flash: Duration::from_millis(500),
            ripple: Duration::from_millis(600),
            stagger: Duration::from_millis(200),
        }
    }
}
