//! Showcase page - the card grid.
//!
//! Builds one controller per profile, inserts the cards one stagger step
//! apart, and routes page-level input to them:
//! - global pointer moves (ambient light, floating cursor)
//! - arrow keys for the hovered card
//! - clicks outside a card close its account menu
//! - window resize drops every tilt
//! - scroll and resize make every card re-measure its box

use std::time::Instant;

use dioxus::desktop::tao::event::{Event, WindowEvent};
use dioxus::desktop::use_wry_event_handler;
use dioxus::prelude::*;
use socialcards_core::{cycle_index, CardController, CycleKey, PointerPosition};
use socialcards_ui::pointer_of;

use crate::components::cards::SocialCard;
use crate::components::decorations::{FloatingCursor, Timestamp};
use crate::context::{use_animation_clock, use_last_card_click, use_layout_epoch, use_settings};

/// Reports page scrolls, at most once per frame
const SCROLL_LISTENER: &str = r#"
let pending = false;
window.addEventListener('scroll', () => {
    if (pending) return;
    pending = true;
    requestAnimationFrame(() => {
        pending = false;
        dioxus.send(window.scrollY);
    });
}, { passive: true });
"#;

/// Whether a page click should close `index`'s menu.
///
/// `clicked` is the card the click landed in, if any. Switcher toggles keep
/// their clicks, so a click that reaches the page never toggled a menu.
fn closes_menu(index: usize, clicked: Option<usize>, menu_open: bool) -> bool {
    menu_open && clicked != Some(index)
}

/// Showcase page component.
#[component]
pub fn Showcase() -> Element {
    let settings = use_settings();
    let clock = use_animation_clock();
    let mut last_card_click = use_last_card_click();
    let mut layout_epoch = use_layout_epoch();
    let mut cursor = use_signal(|| None::<PointerPosition>);
    let mut inserted = use_signal(|| 0usize);

    let timings = settings.timings;
    let cards: Vec<Signal<CardController>> = use_hook(|| {
        settings
            .controllers(Instant::now())
            .into_iter()
            .map(Signal::new)
            .collect()
    });

    // Staggered entrance: card `i` appears at i * stagger
    let total = cards.len();
    use_future(move || async move {
        for index in 0..total {
            if index > 0 {
                tokio::time::sleep(timings.stagger).await;
            }
            inserted.set(index + 1);
        }
    });

    // Animation pump: sleep until the earliest deadline, then advance
    let pump_cards = cards.clone();
    let pump_clock = clock.clone();
    use_future(move || {
        let cards = pump_cards.clone();
        let clock = pump_clock.clone();
        async move {
            loop {
                let next = cards.iter().filter_map(|card| card.peek().next_deadline()).min();
                match next {
                    Some(deadline) => {
                        tokio::select! {
                            _ = tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)) => {}
                            _ = clock.kicked() => {}
                        }
                    }
                    None => clock.kicked().await,
                }

                let now = Instant::now();
                for mut card in cards.iter().copied() {
                    let due = card.peek().next_deadline().is_some_and(|d| d <= now);
                    if due {
                        card.write().advance(now);
                    }
                }
            }
        }
    });

    use_future(move || async move {
        let mut listener = document::eval(SCROLL_LISTENER);
        while listener.recv::<f64>().await.is_ok() {
            layout_epoch.write().bump();
        }
    });

    // Resize resets transforms
    let resize_cards = cards.clone();
    use_wry_event_handler(move |event, _| {
        if let Event::WindowEvent {
            event: WindowEvent::Resized(_),
            ..
        } = event
        {
            for mut card in resize_cards.iter().copied() {
                if card.peek().tilt().is_some() {
                    card.write().reset_transform();
                }
            }
            layout_epoch.write().bump();
        }
    });

    let move_cards = cards.clone();
    let on_pointer_move = move |e: MouseEvent| {
        let position = pointer_of(&e);
        cursor.set(Some(position));
        // Only hovered cards are subscribed to their trackers
        for mut card in move_cards.iter().copied() {
            if card.peek().is_hovered() {
                card.write().global_pointer_moved(position);
            }
        }
    };

    let key_cards = cards.clone();
    let key_clock = clock.clone();
    let on_key = move |e: KeyboardEvent| {
        let Some(key) = CycleKey::from_key_name(&e.key().to_string()) else {
            return;
        };
        let Some(mut card) = key_cards.iter().copied().find(|c| c.peek().is_hovered()) else {
            return;
        };

        let (current, total) = {
            let controller = card.peek();
            (
                controller.selected_account_index(),
                controller.profile().account_count(),
            )
        };
        if let Some(next) = cycle_index(current, total, key) {
            if let Err(err) = card.write().smooth_account_transition(next, Instant::now()) {
                tracing::warn!("Keyboard account switch dropped: {}", err);
            }
            key_clock.kick();
        }
    };

    let click_cards = cards.clone();
    let on_page_click = move |_: MouseEvent| {
        let clicked = *last_card_click.peek();
        last_card_click.set(None);
        for (index, mut card) in click_cards.iter().copied().enumerate() {
            if closes_menu(index, clicked, card.peek().is_menu_open()) {
                card.write().close_menu();
            }
        }
    };

    let visible = inserted().min(cards.len());

    rsx! {
        main {
            class: "showcase",
            tabindex: "0",
            autofocus: true,
            onmousemove: on_pointer_move,
            onkeydown: on_key,
            onclick: on_page_click,

            header { class: "showcase-header",
                h1 { class: "page-title", "Find me online" }
            }

            div { id: "socialMediaContainer", class: "card-grid",
                for (index, card) in cards.iter().copied().take(visible).enumerate() {
                    SocialCard { key: "{index}", card, index }
                }
            }

            Timestamp {}
            FloatingCursor { position: cursor() }
        }
    }
}
