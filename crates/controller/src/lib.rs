//! Controller crate for the pilot roster.
//!
//! `PilotController` sits in front of a `PilotFilterService`, remembers the
//! last category that was shown and re-broadcasts events to its own
//! listeners (typically a display layer).

pub mod controller;
pub mod listener;

pub use controller::PilotController;
pub use listener::{ControllerListener, ListenerHooks};
