//! Reusable card components

mod button;
mod platform_icon;
mod ripple;

pub use button::*;
pub use platform_icon::*;
pub use ripple::*;
