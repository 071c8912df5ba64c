//! UI components for the Social Cards showcase.

pub mod cards;
pub mod decorations;
