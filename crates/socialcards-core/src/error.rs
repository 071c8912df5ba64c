//! Error types for Social Cards

use thiserror::Error;

/// Main error type for card and profile operations
#[derive(Error, Debug)]
pub enum CardError {
    /// Profile data violates the parallel-array invariant
    #[error("Invalid profile '{platform}': {reason}")]
    InvalidProfile {
        /// Platform name of the offending profile
        platform: String,
        /// What was wrong with it
        reason: String,
    },

    /// Requested account index does not exist on the profile
    #[error("Account index {index} out of range (profile has {len} accounts)")]
    AccountOutOfRange {
        /// Requested index
        index: usize,
        /// Number of accounts on the profile
        len: usize,
    },

    /// Color string could not be parsed as "r, g, b"
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A profile feed contained no profiles
    #[error("Profile set is empty")]
    EmptyProfileSet,

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile feed could not be deserialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CardError
pub type CardResult<T> = Result<T, CardError>;
