//! Social Cards Core Library
//!
//! Interaction and animation logic for animated social-profile cards.
//!
//! ## Overview
//!
//! Each card on the showcase is driven by a [`CardController`]: it owns the
//! card's profile, its selected account, a [`PointerTracker`] for the
//! cursor-follow light, and a [`Scheduler`] holding every timed phase
//! (fades, wobble/pulse, ripple expiry). Nothing in this crate touches a UI
//! toolkit; the desktop shell feeds events in, calls `advance` when a
//! deadline passes, and renders [`CardView`] snapshots.
//!
//! ## Quick Start
//!
//! ```
//! use std::time::{Duration, Instant};
//! use socialcards_core::{builtin_profiles, AnimationTimings, CardController};
//!
//! let start = Instant::now();
//! let instagram = builtin_profiles().remove(1);
//! let mut card = CardController::new(instagram, AnimationTimings::default(), start);
//!
//! card.smooth_account_transition(1, start).unwrap();
//! card.advance(start + Duration::from_millis(600));
//!
//! assert_eq!(card.selected_account_index(), 1);
//! assert!(!card.is_animating());
//! assert_eq!(card.view().switcher.unwrap().label, "Instagram (2/2)");
//! ```

pub mod card;
pub mod error;
pub mod keyboard;
pub mod pointer;
pub mod profiles;
pub mod scheduler;
pub mod timings;
pub mod tone;
pub mod types;
pub mod visual;

// Re-exports
pub use card::{
    AccountPhase, CardController, CardTask, CardView, Effect, Ripple, RippleId, RippleTarget,
    SwitcherView, TransitionOutcome,
};
pub use error::{CardError, CardResult};
pub use keyboard::{cycle_index, CycleKey};
pub use pointer::{PointerTracker, SubscriptionId};
pub use profiles::{builtin_profiles, default_profiles_path, load_profiles, parse_profiles};
pub use scheduler::{Scheduler, TaskId};
pub use timings::AnimationTimings;
pub use tone::HoverTone;
pub use types::*;
