//! Social Cards UI Components
//!
//! Dioxus primitives shared by the showcase:
//! - Ripple-aware buttons and links that measure themselves on click
//! - Platform glyph icons drawn as inline SVG
//!
//! Components here are stateless; card state lives in
//! `socialcards_core::CardController` and is passed in as props.

pub mod components;

pub use components::*;
