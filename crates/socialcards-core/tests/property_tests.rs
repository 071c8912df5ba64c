//! Property-based tests for card controllers
//!
//! Uses proptest to verify the invariants of the account switcher, tilt,
//! and the effect gate.

use std::time::{Duration, Instant};

use proptest::prelude::*;
use socialcards_core::visual::Tilt;
use socialcards_core::{
    Account, AnimationTimings, Bounds, CardController, PointerPosition, Profile, Rgb,
};

// ============================================================================
// Strategy Generators
// ============================================================================

fn account_strategy() -> impl Strategy<Value = Account> {
    ("[a-z0-9._]{1,16}", prop::option::of("[a-zA-Z ]{0,40}")).prop_map(|(name, bio)| {
        let account = Account::new(name.clone(), format!("https://example.com/{}", name));
        match bio {
            Some(bio) => account.with_bio(bio),
            None => account,
        }
    })
}

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

/// Generate valid profiles with 1..=5 accounts
fn profile_strategy() -> impl Strategy<Value = Profile> {
    prop::collection::vec((account_strategy(), rgb_strategy(), rgb_strategy()), 1..=5).prop_map(
        |entries| {
            let mut accounts = Vec::new();
            let mut accents = Vec::new();
            let mut secondaries = Vec::new();
            for (account, accent, secondary) in entries {
                accounts.push(account);
                accents.push(accent);
                secondaries.push(secondary);
            }
            Profile::new("Platform", accounts, accents, secondaries).expect("parallel arrays")
        },
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// A switcher is rendered exactly when there is more than one account
    #[test]
    fn switcher_iff_multiple_accounts(profile in profile_strategy()) {
        let expected = profile.account_count() > 1;
        let card = CardController::new(profile, AnimationTimings::default(), Instant::now());
        prop_assert_eq!(card.view().switcher.is_some(), expected);
    }

    /// Any valid target index is reached once the window elapses
    #[test]
    fn transition_reaches_target(profile in profile_strategy(), pick in any::<prop::sample::Index>()) {
        let start = Instant::now();
        let len = profile.account_count();
        let target = pick.index(len);
        let mut card = CardController::new(profile, AnimationTimings::default(), start);

        card.smooth_account_transition(target, start).unwrap();
        card.advance(start + AnimationTimings::default().transition_window());

        prop_assert_eq!(card.selected_account_index(), target);
        prop_assert!(!card.is_animating());
        let label = card.view().switcher.map(|s| s.label);
        if len > 1 {
            let expected_suffix = format!("({}/{})", target + 1, len);
            prop_assert!(label.unwrap().ends_with(&expected_suffix));
        }
    }

    /// Selecting the current account never changes anything
    #[test]
    fn same_index_is_noop(profile in profile_strategy()) {
        let start = Instant::now();
        let mut card = CardController::new(profile, AnimationTimings::default(), start);
        let before = card.view();
        card.smooth_account_transition(0, start).unwrap();
        prop_assert!(!card.is_animating());
        prop_assert_eq!(card.view(), before);
    }

    /// Repeated wobble/pulse triggers while animating never extend the effect
    #[test]
    fn effect_gate_does_not_restart(offsets in prop::collection::vec(0u64..500, 1..10)) {
        let start = Instant::now();
        let profile = Profile::new(
            "GitHub",
            vec![Account::new("solo", "https://example.com/solo")],
            vec![Rgb::new(1, 2, 3)],
            vec![Rgb::new(4, 5, 6)],
        ).unwrap();
        let mut card = CardController::new(profile, AnimationTimings::default(), start);
        prop_assert!(card.icon_hover(start));

        for offset in offsets {
            let now = start + Duration::from_millis(offset);
            prop_assert!(!card.link_hover(now));
            prop_assert!(!card.icon_hover(now));
            prop_assert!(card.is_animating());
        }

        card.advance(start + Duration::from_millis(500));
        prop_assert!(!card.is_animating());
    }

    /// Tilt is antisymmetric about the centre and bounded inside the box
    #[test]
    fn tilt_symmetry(fx in 0.0f64..=1.0, fy in 0.0f64..=1.0) {
        let tilt = Tilt::from_fraction(fx, fy);
        let mirrored = Tilt::from_fraction(1.0 - fx, 1.0 - fy);
        prop_assert!((tilt.rotate_x + mirrored.rotate_x).abs() < 1e-9);
        prop_assert!((tilt.rotate_y + mirrored.rotate_y).abs() < 1e-9);
        prop_assert!(tilt.rotate_x.abs() <= 10.0 + 1e-9);
        prop_assert!(tilt.rotate_y.abs() <= 10.0 + 1e-9);
    }

    /// The ambient gradient origin is the pointer's percentage offset
    #[test]
    fn gradient_origin_matches_pointer(x in -100.0f64..500.0, y in -100.0f64..500.0) {
        let start = Instant::now();
        let profile = Profile::new(
            "GitHub",
            vec![Account::new("solo", "https://example.com/solo")],
            vec![Rgb::new(1, 2, 3)],
            vec![Rgb::new(4, 5, 6)],
        ).unwrap();
        let mut card = CardController::new(profile, AnimationTimings::default(), start);
        card.set_bounds(Bounds::new(0.0, 0.0, 400.0, 400.0));
        card.pointer_enter();
        card.global_pointer_moved(PointerPosition::new(x, y));

        let origin = card.gradient_origin().unwrap();
        prop_assert!((origin.x_pct - x / 4.0).abs() < 1e-9);
        prop_assert!((origin.y_pct - y / 4.0).abs() < 1e-9);
    }
}
