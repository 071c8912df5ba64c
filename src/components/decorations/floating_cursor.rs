//! Glow that trails the pointer across the page.

use dioxus::prelude::*;
use socialcards_core::PointerPosition;

/// Soft glow centered on the last known pointer position.
///
/// Hidden until the pointer has moved at least once.
#[component]
pub fn FloatingCursor(position: Option<PointerPosition>) -> Element {
    let Some(position) = position else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "floating-cursor",
            style: "left: {position.x}px; top: {position.y}px;",
        }
    }
}
