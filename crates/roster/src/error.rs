//! Error types for the roster crate.
//!
//! Loading a roster can fail on I/O or on malformed JSON (including a
//! record that omits a required field such as `team`). Strict category
//! parsing reports unknown codes instead of falling back to `All`.

use thiserror::Error;

/// Errors that can occur while loading pilots or parsing categories.
#[derive(Error, Debug)]
pub enum RosterError {
    /// I/O error occurred while reading a roster file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Roster text is not a JSON array of pilot records
    ///
    /// serde reports missing fields here, e.g. "missing field `team`".
    #[error("Invalid roster JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A category code did not match any known category
    #[error("Unknown category code: {code:?}")]
    UnknownCategory { code: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, RosterError>;
