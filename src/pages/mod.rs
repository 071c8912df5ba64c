//! Page components for Social Cards.

mod showcase;

pub use showcase::Showcase;
