//! Social Card Component
//!
//! One profile card: platform icon, account switcher, username and bio,
//! profile link, and the ambient light layer. All visual state comes from
//! the card's [`CardController`].

use std::rc::Rc;
use std::time::Instant;

use dioxus::prelude::*;
use socialcards_core::{Bounds, CardController, HoverTone, Ripple, RippleTarget};
use socialcards_ui::{pointer_of, ButtonVariant, PlatformIcon, RippleButton, RippleClick, RippleLink};

use crate::context::{use_animation_clock, use_last_card_click, use_layout_epoch, AnimationClock};

/// Play the hover tone through the webview. Fire and forget.
fn play_tone(tone: HoverTone) {
    let _ = document::eval(&tone.script());
}

/// Attach a measured ripple to the card and wake the pump for its expiry
fn add_ripple(
    mut card: Signal<CardController>,
    clock: &AnimationClock,
    target: RippleTarget,
    measured: RippleClick,
) {
    card.write()
        .spawn_ripple(target, measured.target, measured.click, Instant::now());
    clock.kick();
}

/// Measure the card and hand its box to the controller when it moved
async fn refresh_bounds(host: Option<Rc<MountedData>>, mut card: Signal<CardController>) {
    let Some(host) = host else {
        return;
    };
    match host.get_client_rect().await {
        Ok(rect) => {
            let bounds = Bounds::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height);
            if card.peek().bounds() != bounds {
                card.write().relayout(bounds);
            }
        }
        Err(e) => tracing::debug!("Could not measure card: {:?}", e),
    }
}

/// Animated social profile card
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     SocialCard {
///         card: controller_signal,
///         index: 0,
///     }
/// }
/// ```
#[component]
pub fn SocialCard(
    /// Controller owning this card's state
    card: Signal<CardController>,
    /// Position in the showcase
    index: usize,
) -> Element {
    let clock = use_animation_clock();
    let mut last_card_click = use_last_card_click();
    let layout_epoch = use_layout_epoch();
    let mut host: Signal<Option<Rc<MountedData>>> = use_signal(|| None);

    // Scroll and resize move the card under the pointer
    use_effect(move || {
        let _epoch = layout_epoch();
        spawn(refresh_bounds(host.peek().clone(), card));
    });

    let view = card.read().view();
    let ripples_on = move |target: RippleTarget| -> Vec<Ripple> {
        card.read()
            .ripples()
            .iter()
            .filter(|ripple| ripple.target == target)
            .copied()
            .collect()
    };

    let card_style = format!(
        "opacity: {}; {}{}",
        view.opacity,
        view.background
            .as_ref()
            .map(|bg| format!("background: {}; ", bg))
            .unwrap_or_default(),
        view.transform
            .as_ref()
            .map(|t| format!("transform: {};", t))
            .unwrap_or_else(|| "transform: none;".to_string()),
    );
    let icon_style = format!(
        "color: {}; transform: {}; transition: transform 0.3s ease;{}",
        view.icon_color,
        view.icon_transform,
        view.icon_animation
            .as_ref()
            .map(|a| format!(" animation: {};", a))
            .unwrap_or_default(),
    );
    let link_style = format!(
        "background-color: {}; color: {}; transform: translateZ(0);{}",
        view.link_background,
        view.link_color,
        view.link_animation
            .as_ref()
            .map(|a| format!(" animation: {};", a))
            .unwrap_or_default(),
    );

    let enter_clock = clock.clone();
    let icon_clock = clock.clone();
    let link_clock = clock.clone();
    let switch_clock = clock.clone();
    let switch_ripple_clock = clock.clone();
    let link_ripple_clock = clock.clone();

    rsx! {
        div {
            class: "{view.classes} loading",
            style: "{card_style}",
            onmounted: move |e| {
                let data = e.data();
                host.set(Some(data.clone()));
                spawn(refresh_bounds(Some(data), card));
            },
            onmouseenter: move |_| {
                if let Some(tone) = card.write().pointer_enter() {
                    play_tone(tone);
                }
                spawn(refresh_bounds(host(), card));
                enter_clock.kick();
            },
            onmouseleave: move |_| card.write().pointer_leave(),
            onmousemove: move |e| card.write().pointer_moved_within(pointer_of(&e)),
            // Reached by clicks anywhere in the card except the switcher toggle
            onclick: move |_| last_card_click.set(Some(index)),

            div { class: "ambient-light", style: "background: {view.ambient_light};" }

            div { class: "card-content",
                div { class: "card-top",
                    div {
                        class: "icon-container",
                        style: "{icon_style}",
                        onmouseenter: move |_| {
                            card.write().icon_hover(Instant::now());
                            icon_clock.kick();
                        },
                        onmouseleave: move |_| card.write().icon_leave(),
                        PlatformIcon { key_name: view.icon_key.clone(), size: 32 }
                    }

                    if let Some(switcher) = view.switcher.clone() {
                        div { class: "account-switcher",
                            RippleButton {
                                variant: ButtonVariant::Switch,
                                ripples: ripples_on(RippleTarget::SwitchButton),
                                onclick: move |_| {
                                    card.write().toggle_menu(Instant::now());
                                    switch_clock.kick();
                                },
                                on_ripple: move |measured| {
                                    add_ripple(card, &switch_ripple_clock, RippleTarget::SwitchButton, measured)
                                },
                                "{switcher.label}"
                                PlatformIcon { key_name: "chevron-right".to_string(), size: 16 }
                            }
                            div {
                                class: if switcher.menu_open { "account-menu visible" } else { "account-menu" },
                                for option in switcher.options.iter() {
                                    {
                                        let option_index = option.index;
                                        let select_clock = clock.clone();
                                        let option_ripple_clock = clock.clone();
                                        rsx! {
                                            RippleButton {
                                                key: "{option_index}",
                                                variant: ButtonVariant::Option,
                                                active: option.active,
                                                ripples: ripples_on(RippleTarget::AccountOption(option_index)),
                                                onclick: move |_| {
                                                    let result = card.write().select_account(option_index, Instant::now());
                                                    if let Err(err) = result {
                                                        tracing::warn!("Account selection dropped: {}", err);
                                                    }
                                                    select_clock.kick();
                                                },
                                                on_ripple: move |measured| {
                                                    add_ripple(
                                                        card,
                                                        &option_ripple_clock,
                                                        RippleTarget::AccountOption(option_index),
                                                        measured,
                                                    )
                                                },
                                                "{option.handle}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "profile-info",
                    h3 {
                        class: "username",
                        style: "opacity: {view.details_opacity};",
                        "{view.username}"
                    }
                    p {
                        class: "bio",
                        style: "opacity: {view.details_opacity};",
                        "{view.bio}"
                    }
                }

                RippleLink {
                    href: view.link.clone(),
                    style: link_style,
                    ripples: ripples_on(RippleTarget::ProfileLink),
                    onhover: move |_| {
                        card.write().link_hover(Instant::now());
                        link_clock.kick();
                    },
                    on_ripple: move |measured| {
                        add_ripple(card, &link_ripple_clock, RippleTarget::ProfileLink, measured)
                    },
                    "View Profile"
                }
            }
        }
    }
}
