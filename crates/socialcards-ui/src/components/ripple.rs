//! Ripple rendering and click measurement

use std::rc::Rc;

use dioxus::prelude::*;
use socialcards_core::{Bounds, PointerPosition, Ripple};

/// A click on a ripple host: where it landed and the host's box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleClick {
    pub target: Bounds,
    pub click: PointerPosition,
}

/// Measure `host` and pair its box with the click position.
///
/// Returns `None` when the element is not mounted or cannot be measured.
pub async fn measure_click(
    host: Option<Rc<MountedData>>,
    click: PointerPosition,
) -> Option<RippleClick> {
    let host = host?;
    match host.get_client_rect().await {
        Ok(rect) => Some(RippleClick {
            target: Bounds::new(rect.origin.x, rect.origin.y, rect.size.width, rect.size.height),
            click,
        }),
        Err(e) => {
            tracing::debug!("Could not measure ripple host: {:?}", e);
            None
        }
    }
}

/// Viewport position of a mouse event
pub fn pointer_of(event: &MouseEvent) -> PointerPosition {
    let point = event.client_coordinates();
    PointerPosition::new(point.x, point.y)
}

/// Render key for a ripple span.
///
/// Keyed by id, so a ripple keeps its element (and its running CSS
/// animation) when an earlier ripple on the same host expires.
pub fn ripple_key(ripple: &Ripple) -> String {
    ripple.id.to_string()
}

/// Live ripples inside a host element
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     button { class: "account-switch-button",
///         "Instagram (1/2)"
///         RippleLayer { ripples: card.ripples().to_vec() }
///     }
/// }
/// ```
#[component]
pub fn RippleLayer(ripples: Vec<Ripple>) -> Element {
    rsx! {
        for (key, style) in ripples.iter().map(|r| (ripple_key(r), r.geometry.style())) {
            span { key: "{key}", class: "ripple", style: "{style}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};
    use socialcards_core::{builtin_profiles, AnimationTimings, CardController, RippleTarget};

    #[test]
    fn ripple_keys_survive_earlier_expiry() {
        let start = Instant::now();
        let instagram = builtin_profiles().remove(1);
        let mut card = CardController::new(instagram, AnimationTimings::default(), start);
        let button = Bounds::new(0.0, 0.0, 120.0, 32.0);

        card.spawn_ripple(RippleTarget::SwitchButton, button, PointerPosition::new(10.0, 10.0), start);
        card.spawn_ripple(
            RippleTarget::SwitchButton,
            button,
            PointerPosition::new(90.0, 10.0),
            start + Duration::from_millis(200),
        );
        let before: Vec<String> = card.ripples().iter().map(ripple_key).collect();

        card.advance(start + Duration::from_millis(600));
        let after: Vec<String> = card.ripples().iter().map(ripple_key).collect();

        assert_eq!(after.len(), 1);
        assert_eq!(after[0], before[1]);
    }
}
