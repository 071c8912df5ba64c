//! Theme for the showcase.

mod styles;

pub use styles::GLOBAL_STYLES;
