//! Error types for the pipeline crate.
//!
//! Filtering itself never fails. Errors only come from listeners: a
//! listener that returns `Err` stops the notification loop and the error is
//! handed back to whoever triggered the notification.

use roster::PilotCategory;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    /// A filter listener failed while handling a result set
    #[error("Listener failed while handling {category} results: {source}")]
    ListenerFailed {
        category: PilotCategory,
        #[source]
        source: anyhow::Error,
    },

    /// A listener failed while handling a data change
    #[error("Listener failed while handling a data change: {source}")]
    DataListenerFailed {
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
