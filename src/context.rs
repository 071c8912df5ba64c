//! Showcase context for Social Cards.
//!
//! Provides the launch settings and the animation clock to all components
//! via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(|| get_settings());
//! use_context_provider(AnimationClock::new);
//!
//! // In child components
//! let settings = use_settings();
//! let clock = use_animation_clock();
//! ```

use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;
use socialcards_core::{AnimationTimings, CardController, HoverTone, Profile};
use tokio::sync::Notify;

/// Launch-time configuration shared with every component.
#[derive(Clone, Debug)]
pub struct ShowcaseSettings {
    /// Profiles to render, in display order
    pub profiles: Vec<Profile>,
    /// Animation durations
    pub timings: AnimationTimings,
    /// Suppress the hover tone
    pub muted: bool,
}

impl ShowcaseSettings {
    /// Build one controller per profile, all starting at `now`.
    pub fn controllers(&self, now: Instant) -> Vec<CardController> {
        let tone = (!self.muted).then(HoverTone::default);
        self.profiles
            .iter()
            .cloned()
            .map(|profile| CardController::new(profile, self.timings, now).with_hover_tone(tone))
            .collect()
    }
}

/// Get the launch settings.
/// Uses the global settings set from command line args.
pub fn get_settings() -> ShowcaseSettings {
    crate::get_settings()
}

/// Hook to access the showcase settings from context.
pub fn use_settings() -> ShowcaseSettings {
    use_context::<ShowcaseSettings>()
}

/// Wakes the page's animation pump.
///
/// Card controllers keep their timed phases in a scheduler; the pump sleeps
/// until the earliest deadline across all cards. Any interaction that may
/// schedule something earlier calls [`AnimationClock::kick`].
#[derive(Clone, Default)]
pub struct AnimationClock {
    notify: Rc<Notify>,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-evaluate the next deadline
    pub fn kick(&self) {
        self.notify.notify_one();
    }

    /// Resolve on the next kick
    pub async fn kicked(&self) {
        self.notify.notified().await;
    }
}

/// Hook to access the animation clock from context.
pub fn use_animation_clock() -> AnimationClock {
    use_context::<AnimationClock>()
}

/// Bumped whenever card boxes may have moved (page scroll, window resize).
/// Each card re-measures itself when it changes.
pub fn use_layout_epoch() -> Signal<LayoutEpoch> {
    use_context::<Signal<LayoutEpoch>>()
}

/// Counter behind [`use_layout_epoch`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutEpoch(pub u64);

impl LayoutEpoch {
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }
}

/// Index of the card that received the latest click, used to close the
/// account menus of every other card.
pub fn use_last_card_click() -> Signal<Option<usize>> {
    use_context::<Signal<Option<usize>>>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use socialcards_core::builtin_profiles;

    #[test]
    fn controllers_follow_profile_order() {
        let settings = ShowcaseSettings {
            profiles: builtin_profiles(),
            timings: AnimationTimings::default(),
            muted: true,
        };
        let mut cards = settings.controllers(Instant::now());
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].profile().platform(), "GitHub");
        assert!(cards[0].pointer_enter().is_none());
    }

    #[test]
    fn layout_epoch_bumps() {
        let mut epoch = LayoutEpoch::default();
        epoch.bump();
        epoch.bump();
        assert_eq!(epoch, LayoutEpoch(2));
    }

    #[test]
    fn unmuted_cards_request_tone() {
        let settings = ShowcaseSettings {
            profiles: builtin_profiles(),
            timings: AnimationTimings::default(),
            muted: false,
        };
        let mut cards = settings.controllers(Instant::now());
        assert!(cards[1].pointer_enter().is_some());
    }
}
