//! Button Components
//!
//! Ripple hosts used on every card:
//! - Switch: the account switcher toggle
//! - Option: one entry in the account menu
//! - Link: the "view profile" anchor

use std::rc::Rc;

use dioxus::prelude::*;
use socialcards_core::Ripple;

use super::ripple::{measure_click, pointer_of, RippleClick, RippleLayer};

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Account switcher toggle
    #[default]
    Switch,
    /// Entry in the account menu
    Option,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Switch => "account-switch-button",
            ButtonVariant::Option => "account-option",
        }
    }

    /// Whether a click stays on the button.
    ///
    /// The switcher toggle keeps its click so the page does not close the
    /// menu it just opened. Option clicks bubble up to the card and the page,
    /// which closes the menus of every other card.
    pub fn contains_click(&self) -> bool {
        matches!(self, ButtonVariant::Switch)
    }
}

/// Properties for the RippleButton component
#[derive(Clone, PartialEq, Props)]
pub struct RippleButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Highlight as the current selection
    #[props(default = false)]
    pub active: bool,
    /// Ripples currently attached to this button
    #[props(default)]
    pub ripples: Vec<Ripple>,
    /// Click handler
    pub onclick: EventHandler<MouseEvent>,
    /// Called with the measured click once the button's box is known
    pub on_ripple: EventHandler<RippleClick>,
    pub children: Element,
}

/// Button that reports clicks for ripple placement
#[component]
pub fn RippleButton(props: RippleButtonProps) -> Element {
    let mut host: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let active_class = if props.active { "active" } else { "" };
    let variant = props.variant;
    let base_class = variant.class();
    let onclick = props.onclick;
    let on_ripple = props.on_ripple;

    rsx! {
        button {
            class: "{base_class} {active_class}",
            r#type: "button",
            onmounted: move |e| host.set(Some(e.data())),
            onclick: move |e| {
                if variant.contains_click() {
                    e.stop_propagation();
                }
                let click = pointer_of(&e);
                onclick.call(e);
                spawn(async move {
                    if let Some(measured) = measure_click(host(), click).await {
                        on_ripple.call(measured);
                    }
                });
            },
            {props.children}
            RippleLayer { ripples: props.ripples.clone() }
        }
    }
}

/// Properties for the RippleLink component
#[derive(Clone, PartialEq, Props)]
pub struct RippleLinkProps {
    pub href: String,
    #[props(default)]
    pub style: String,
    #[props(default)]
    pub ripples: Vec<Ripple>,
    /// Pointer entered the link
    #[props(default)]
    pub onhover: Option<EventHandler<()>>,
    pub on_ripple: EventHandler<RippleClick>,
    pub children: Element,
}

/// Profile link anchor with ripple feedback
#[component]
pub fn RippleLink(props: RippleLinkProps) -> Element {
    let mut host: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let onhover = props.onhover;
    let on_ripple = props.on_ripple;

    rsx! {
        a {
            class: "profile-link",
            href: "{props.href}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "{props.style}",
            onmounted: move |e| host.set(Some(e.data())),
            onmouseover: move |_| {
                if let Some(handler) = onhover {
                    handler.call(());
                }
            },
            onclick: move |e| {
                let click = pointer_of(&e);
                spawn(async move {
                    if let Some(measured) = measure_click(host(), click).await {
                        on_ripple.call(measured);
                    }
                });
            },
            {props.children}
            RippleLayer { ripples: props.ripples.clone() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Switch.class(), "account-switch-button");
        assert_eq!(ButtonVariant::Option.class(), "account-option");
    }

    #[test]
    fn only_switch_keeps_its_click() {
        assert!(ButtonVariant::Switch.contains_click());
        assert!(!ButtonVariant::Option.contains_click());
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Switch);
    }
}
