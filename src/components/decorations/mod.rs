//! Page decorations around the card grid.

mod floating_cursor;
mod timestamp;

pub use floating_cursor::FloatingCursor;
pub use timestamp::Timestamp;
