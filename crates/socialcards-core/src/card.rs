//! Card interaction and animation controller.
//!
//! A [`CardController`] owns everything that changes on one card: the
//! selected account, the account-switch phase, wobble/pulse effects, the
//! ambient gradient, tilt, ripples and menu state. Timed phases are entries
//! on the controller's [`Scheduler`]; the host calls [`CardController::advance`]
//! when the next deadline passes.
//!
//! ## Account switch
//!
//! ```text
//!   Idle ──smooth_account_transition(i != selected)──▶ FadingOut { target }
//!     ▲                                                    │ fade_out
//!     │ settle                                             ▼
//!   FadingIn ◀────────── swap to target, opacity 1 ────────┘
//! ```
//!
//! While a switch or an effect is running the card "is animating": tilt and
//! gradient updates are skipped and new wobble/pulse triggers are dropped.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::error::{CardError, CardResult};
use crate::pointer::{PointerTracker, SubscriptionId};
use crate::scheduler::{Scheduler, TaskId};
use crate::timings::AnimationTimings;
use crate::tone::HoverTone;
use crate::types::{Account, Bounds, PointerPosition, Profile, Rgb};
use crate::visual::{ambient_gradient, ambient_light_wash, GradientOrigin, RippleGeometry, Tilt};

/// Phase of the account-switch state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountPhase {
    Idle,
    /// Card is fading out; `target` becomes selected when the fade ends
    FadingOut { target: usize },
    /// New account is shown and the card is fading back in
    FadingIn,
}

impl AccountPhase {
    pub fn is_transitioning(&self) -> bool {
        !matches!(self, AccountPhase::Idle)
    }
}

/// Short named animations gated by the animating flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Icon wobble on hover
    Wobble,
    /// Profile link pulse on hover
    Pulse,
}

impl Effect {
    /// CSS `animation` value
    pub fn animation(&self, duration: Duration) -> String {
        let name = match self {
            Effect::Wobble => "wobble",
            Effect::Pulse => "pulse",
        };
        format!("{} {}s ease-in-out", name, duration.as_secs_f64())
    }
}

/// Outcome of [`CardController::smooth_account_transition`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// Fade-out has begun
    Started,
    /// Requested account is already selected
    Unchanged,
    /// Another switch is in flight; request dropped
    Busy,
}

/// Interactive element a ripple is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RippleTarget {
    SwitchButton,
    AccountOption(usize),
    ProfileLink,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

impl fmt::Display for RippleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ripple-{}", self.0)
    }
}

/// A live ripple
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub target: RippleTarget,
    pub geometry: RippleGeometry,
}

/// Timed continuations run by [`CardController::advance`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTask {
    CompleteFadeOut,
    CompleteTransition,
    RevealDetails,
    EndEffect,
    EndSwitchFlash,
    ExpireRipple(RippleId),
}

/// One entry of the account menu
#[derive(Debug, Clone, PartialEq)]
pub struct AccountOptionView {
    pub index: usize,
    pub handle: String,
    pub active: bool,
}

/// Account switcher region; absent for single-account profiles
#[derive(Debug, Clone, PartialEq)]
pub struct SwitcherView {
    /// e.g. `Instagram (1/2)`
    pub label: String,
    pub options: Vec<AccountOptionView>,
    pub menu_open: bool,
}

/// Everything the card markup needs, computed from controller state.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub platform: String,
    pub icon_key: String,
    pub classes: String,
    pub opacity: f64,
    /// Ambient gradient override while hovered
    pub background: Option<String>,
    pub transform: Option<String>,
    pub icon_color: String,
    pub icon_transform: &'static str,
    pub icon_animation: Option<String>,
    pub switcher: Option<SwitcherView>,
    pub username: String,
    pub bio: String,
    pub details_opacity: f64,
    pub link: String,
    pub link_background: String,
    pub link_color: String,
    pub link_animation: Option<String>,
    pub ambient_light: String,
}

/// Per-card state machine
#[derive(Debug)]
pub struct CardController {
    profile: Profile,
    timings: AnimationTimings,
    selected: usize,
    phase: AccountPhase,
    effect: Option<Effect>,
    tracker: PointerTracker,
    /// Latest position delivered by the tracker subscription
    ambient_inbox: Rc<Cell<Option<PointerPosition>>>,
    subscription: Option<SubscriptionId>,
    /// Last viewport position seen while hovered
    last_pointer: Option<PointerPosition>,
    bounds: Bounds,
    hovered: bool,
    gradient: Option<GradientOrigin>,
    tilt: Option<Tilt>,
    visible: bool,
    details_visible: bool,
    menu_open: bool,
    switch_flash: Option<TaskId>,
    icon_lifted: bool,
    ripples: Vec<Ripple>,
    next_ripple: u64,
    hover_tone: Option<HoverTone>,
    scheduler: Scheduler<CardTask>,
}

impl CardController {
    /// Create the controller for `profile` showing its first account.
    ///
    /// Username and bio start hidden and are revealed after
    /// `details_reveal`, like every later content update.
    pub fn new(profile: Profile, timings: AnimationTimings, now: Instant) -> Self {
        let mut scheduler = Scheduler::new();
        scheduler.schedule_after(now, timings.details_reveal, CardTask::RevealDetails);

        tracing::debug!(
            platform = profile.platform(),
            accounts = profile.account_count(),
            "Card created"
        );

        Self {
            profile,
            timings,
            selected: 0,
            phase: AccountPhase::Idle,
            effect: None,
            tracker: PointerTracker::new(),
            ambient_inbox: Rc::new(Cell::new(None)),
            subscription: None,
            last_pointer: None,
            bounds: Bounds::default(),
            hovered: false,
            gradient: None,
            tilt: None,
            visible: true,
            details_visible: false,
            menu_open: false,
            switch_flash: None,
            icon_lifted: false,
            ripples: Vec::new(),
            next_ripple: 0,
            hover_tone: Some(HoverTone::default()),
            scheduler,
        }
    }

    /// Set or clear (`None`) the tone requested on hover
    pub fn with_hover_tone(mut self, tone: Option<HoverTone>) -> Self {
        self.hover_tone = tone;
        self
    }

    // === State queries ===

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn selected_account_index(&self) -> usize {
        self.selected
    }

    pub fn selected_account(&self) -> &Account {
        &self.profile.accounts()[self.selected]
    }

    pub fn phase(&self) -> AccountPhase {
        self.phase
    }

    pub fn active_effect(&self) -> Option<Effect> {
        self.effect
    }

    /// True while an account switch or a wobble/pulse is running
    pub fn is_animating(&self) -> bool {
        self.phase.is_transitioning() || self.effect.is_some()
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn has_switcher(&self) -> bool {
        self.profile.has_multiple_accounts()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn is_switching(&self) -> bool {
        self.switch_flash.is_some()
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn tilt(&self) -> Option<Tilt> {
        self.tilt
    }

    pub fn gradient_origin(&self) -> Option<GradientOrigin> {
        self.gradient
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Deadline of the next timed phase, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }

    fn colors(&self) -> (Rgb, Rgb) {
        match self.profile.entry(self.selected) {
            Some((_, accent, secondary)) => (accent, secondary),
            None => (Rgb::new(255, 255, 255), Rgb::new(255, 255, 255)),
        }
    }

    // === Pointer ===

    /// Update the element's bounding box
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    /// Pointer entered the card: start following the global pointer.
    ///
    /// Returns the tone to play, if any.
    pub fn pointer_enter(&mut self) -> Option<HoverTone> {
        self.hovered = true;
        if self.subscription.is_none() {
            let inbox = self.ambient_inbox.clone();
            self.subscription = Some(self.tracker.subscribe(move |pos| inbox.set(Some(pos))));
        }
        self.hover_tone
    }

    /// Pointer left the card: stop following, drop gradient and tilt.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        if let Some(id) = self.subscription.take() {
            self.tracker.unsubscribe(id);
        }
        self.ambient_inbox.set(None);
        self.last_pointer = None;
        self.gradient = None;
        self.tilt = None;
    }

    /// Global pointer move. Feeds the tracker; while subscribed the
    /// ambient gradient follows the pointer unless the card is animating.
    pub fn global_pointer_moved(&mut self, position: PointerPosition) {
        self.tracker.publish(position);
        if self.hovered {
            self.last_pointer = Some(position);
        }

        if let Some(latest) = self.ambient_inbox.take() {
            if !self.is_animating() {
                self.gradient = Some(GradientOrigin::from_pointer(&self.bounds, latest));
            }
        }
    }

    /// Pointer move over the card itself: tilt towards the pointer.
    pub fn pointer_moved_within(&mut self, position: PointerPosition) {
        self.last_pointer = Some(position);
        if self.is_animating() {
            return;
        }
        self.tilt = Some(Tilt::from_pointer(&self.bounds, position));
    }

    /// Drop the tilt transform (window resize)
    pub fn reset_transform(&mut self) {
        self.tilt = None;
    }

    /// The card's box moved under a still pointer (scroll, resize).
    ///
    /// Gradient and tilt are re-aimed at the last pointer position. If the
    /// card slid out from under the pointer it is treated as a leave.
    pub fn relayout(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        let Some(last) = self.last_pointer.filter(|_| self.hovered) else {
            return;
        };
        if !bounds.contains(last) {
            tracing::debug!(platform = self.profile.platform(), "Card scrolled away from pointer");
            self.pointer_leave();
            return;
        }
        if self.is_animating() {
            return;
        }
        if self.gradient.is_some() {
            self.gradient = Some(GradientOrigin::from_pointer(&bounds, last));
        }
        if self.tilt.is_some() {
            self.tilt = Some(Tilt::from_pointer(&bounds, last));
        }
    }

    // === Account switching ===

    /// Fade to account `index`.
    ///
    /// Selecting the current account does nothing. A request while a
    /// switch is already running is dropped.
    pub fn smooth_account_transition(
        &mut self,
        index: usize,
        now: Instant,
    ) -> CardResult<TransitionOutcome> {
        let len = self.profile.account_count();
        if index >= len {
            return Err(CardError::AccountOutOfRange { index, len });
        }
        if index == self.selected {
            return Ok(TransitionOutcome::Unchanged);
        }
        if self.phase.is_transitioning() {
            tracing::debug!(
                platform = self.profile.platform(),
                requested = index,
                "Account switch already running, ignoring"
            );
            return Ok(TransitionOutcome::Busy);
        }

        tracing::debug!(
            platform = self.profile.platform(),
            from = self.selected,
            to = index,
            "Account switch started"
        );
        self.phase = AccountPhase::FadingOut { target: index };
        self.visible = false;
        self.scheduler
            .schedule_after(now, self.timings.fade_out, CardTask::CompleteFadeOut);
        Ok(TransitionOutcome::Started)
    }

    /// Switcher button click: toggle the menu and flash `switching`.
    ///
    /// A second click inside the flash window restarts it.
    pub fn toggle_menu(&mut self, now: Instant) {
        if !self.has_switcher() {
            return;
        }
        self.menu_open = !self.menu_open;
        if let Some(pending) = self.switch_flash.take() {
            self.scheduler.cancel(pending);
        }
        self.switch_flash = Some(self.scheduler.schedule_after(
            now,
            self.timings.switch_flash,
            CardTask::EndSwitchFlash,
        ));
    }

    /// Click landed outside the card
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Menu option click
    pub fn select_account(&mut self, index: usize, now: Instant) -> CardResult<TransitionOutcome> {
        self.smooth_account_transition(index, now)
    }

    // === Effects ===

    /// Start `effect` unless something is already animating.
    /// Returns whether it started.
    pub fn trigger_effect(&mut self, effect: Effect, now: Instant) -> bool {
        if self.is_animating() {
            return false;
        }
        self.effect = Some(effect);
        self.scheduler
            .schedule_after(now, self.timings.effect, CardTask::EndEffect);
        true
    }

    /// Pointer over the platform icon: lift it and wobble
    pub fn icon_hover(&mut self, now: Instant) -> bool {
        self.icon_lifted = true;
        self.trigger_effect(Effect::Wobble, now)
    }

    pub fn icon_leave(&mut self) {
        self.icon_lifted = false;
    }

    /// Pointer over the profile link: pulse it
    pub fn link_hover(&mut self, now: Instant) -> bool {
        self.trigger_effect(Effect::Pulse, now)
    }

    /// Spawn a ripple on `target`, centred on `click`. Ripples are not
    /// gated and expire independently.
    pub fn spawn_ripple(
        &mut self,
        target: RippleTarget,
        target_bounds: Bounds,
        click: PointerPosition,
        now: Instant,
    ) -> RippleId {
        let id = RippleId(self.next_ripple);
        self.next_ripple += 1;
        self.ripples.push(Ripple {
            id,
            target,
            geometry: RippleGeometry::new(&target_bounds, click),
        });
        self.scheduler
            .schedule_after(now, self.timings.ripple, CardTask::ExpireRipple(id));
        id
    }

    // === Time ===

    /// Run every task due at `now`. Returns how many ran.
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut ran = 0;
        while let Some(task) = self.scheduler.pop_due(now) {
            self.apply(task.payload, task.run_at);
            ran += 1;
        }
        ran
    }

    fn apply(&mut self, task: CardTask, at: Instant) {
        match task {
            CardTask::CompleteFadeOut => {
                if let AccountPhase::FadingOut { target } = self.phase {
                    self.selected = target;
                    self.visible = true;
                    self.details_visible = false;
                    self.phase = AccountPhase::FadingIn;
                    self.scheduler
                        .schedule_after(at, self.timings.details_reveal, CardTask::RevealDetails);
                    self.scheduler
                        .schedule_after(at, self.timings.settle, CardTask::CompleteTransition);
                }
            }
            CardTask::CompleteTransition => {
                self.phase = AccountPhase::Idle;
                tracing::debug!(
                    platform = self.profile.platform(),
                    selected = self.selected,
                    "Account switch finished"
                );
            }
            CardTask::RevealDetails => self.details_visible = true,
            CardTask::EndEffect => self.effect = None,
            CardTask::EndSwitchFlash => self.switch_flash = None,
            CardTask::ExpireRipple(id) => self.ripples.retain(|r| r.id != id),
        }
    }

    // === View ===

    /// Snapshot of the rendered card
    pub fn view(&self) -> CardView {
        let account = self.selected_account();
        let (accent, secondary) = self.colors();
        let platform = self.profile.platform().to_string();

        let mut classes = String::from("social-card");
        if self.hovered {
            classes.push_str(" card-hover");
        }
        if self.is_switching() {
            classes.push_str(" switching");
        }

        let switcher = self.has_switcher().then(|| SwitcherView {
            label: format!(
                "{} ({}/{})",
                platform,
                self.selected + 1,
                self.profile.account_count()
            ),
            options: self
                .profile
                .accounts()
                .iter()
                .enumerate()
                .map(|(index, acc)| AccountOptionView {
                    index,
                    handle: acc.handle(),
                    active: index == self.selected,
                })
                .collect(),
            menu_open: self.menu_open,
        });

        let effect_css = |effect: Effect| {
            (self.effect == Some(effect)).then(|| effect.animation(self.timings.effect))
        };

        CardView {
            icon_key: self.profile.icon_key(),
            classes,
            opacity: if self.visible { 1.0 } else { 0.0 },
            background: self
                .gradient
                .map(|origin| ambient_gradient(origin, accent, secondary)),
            transform: self.tilt.map(|tilt| tilt.transform()),
            icon_color: accent.css(),
            icon_transform: if self.icon_lifted {
                "scale(1.2) rotate(5deg)"
            } else {
                "scale(1) rotate(0deg)"
            },
            icon_animation: effect_css(Effect::Wobble),
            switcher,
            username: account.handle(),
            bio: account.bio.clone().unwrap_or_default(),
            details_opacity: if self.details_visible { 1.0 } else { 0.0 },
            link: account.link.clone(),
            link_background: secondary.css_alpha(0.1),
            link_color: accent.css(),
            link_animation: effect_css(Effect::Pulse),
            ambient_light: ambient_light_wash(accent, secondary),
            platform,
        }
    }
}
