//! Filtering for the pilot roster.
//!
//! This crate provides:
//! - `PilotFilter`: composable predicates over a `Pilot`
//! - `PilotFilterService`: owns the roster, answers queries, notifies listeners
//! - `ListenerRegistry`: the ordered listener list behind every notifier
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{PilotFilter, PilotFilterService};
//! use roster::{PilotCategory, sample_pilots};
//!
//! let mut service = PilotFilterService::with_pilots(sample_pilots());
//! service.add_filter_listener(|category, pilots| {
//!     println!("{}: {} pilots", category.display_name(), pilots.len());
//!     Ok(())
//! });
//!
//! // Notifies listeners
//! let legends = service.filter_legends()?;
//!
//! // Silent ad hoc query
//! let filter = PilotFilter::by_team("mclaren").or(&PilotFilter::by_minimum_championships(5));
//! let picked = service.filter(&filter);
//! ```

pub mod error;
pub mod filter;
pub mod listeners;
pub mod service;

// Re-export main types
pub use error::{FilterError, Result};
pub use filter::PilotFilter;
pub use listeners::{ListenerId, ListenerRegistry};
pub use service::{FilterListener, PilotFilterService};
