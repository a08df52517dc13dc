//! # Pilot Controller
//!
//! Thin layer over `PilotFilterService`:
//! 1. `show_*` calls delegate to the service's notifying queries
//! 2. The service notifies the controller's internal handler
//! 3. The handler records the active category and re-emits a
//!    "filter changed" event to controller listeners
//!
//! Adding pilots through the controller always emits "data changed", even
//! though the service itself is silent on adds.

use std::cell::RefCell;
use std::rc::Rc;

use pipeline::{FilterError, ListenerId, ListenerRegistry, PilotFilterService};
use roster::{Pilot, PilotCategory};

use crate::listener::ControllerListener;

/// State shared between the controller and the handler it registers on
/// the service.
struct ControllerState {
    active_category: PilotCategory,
    listeners: ListenerRegistry<Box<dyn ControllerListener>>,
}

impl ControllerState {
    fn on_category_changed(&mut self, category: PilotCategory, pilots: &[Pilot]) -> anyhow::Result<()> {
        self.active_category = category;
        tracing::debug!(
            "Active category is now {} ({} pilots)",
            category,
            pilots.len()
        );
        for listener in self.listeners.iter_mut() {
            listener.on_filter_changed(category, pilots)?;
        }
        Ok(())
    }

    fn notify_data_changed(&mut self) -> pipeline::Result<()> {
        for listener in self.listeners.iter_mut() {
            listener
                .on_data_changed()
                .map_err(|source| FilterError::DataListenerFailed { source })?;
        }
        Ok(())
    }
}

/// Tracks the active category over one `PilotFilterService`.
pub struct PilotController {
    filter_service: PilotFilterService,
    state: Rc<RefCell<ControllerState>>,
}

impl PilotController {
    /// Controller over a new, empty service.
    pub fn new() -> Self {
        Self::with_service(PilotFilterService::new())
    }

    /// Controller over a new service holding `pilots`.
    pub fn with_pilots(pilots: impl IntoIterator<Item = Pilot>) -> Self {
        Self::with_service(PilotFilterService::with_pilots(pilots))
    }

    /// Controller over an existing service.
    ///
    /// Listeners already registered on `filter_service` stay registered and
    /// are called before the controller's handler.
    pub fn with_service(mut filter_service: PilotFilterService) -> Self {
        let state = Rc::new(RefCell::new(ControllerState {
            active_category: PilotCategory::All,
            listeners: ListenerRegistry::new(),
        }));

        let handler_state = Rc::clone(&state);
        filter_service.add_filter_listener(move |category, pilots| {
            handler_state.borrow_mut().on_category_changed(category, pilots)
        });

        Self {
            filter_service,
            state,
        }
    }

    pub fn show_all(&mut self) -> pipeline::Result<Vec<Pilot>> {
        self.filter_service.filter_all()
    }

    pub fn show_legends(&mut self) -> pipeline::Result<Vec<Pilot>> {
        self.filter_service.filter_legends()
    }

    pub fn show_current(&mut self) -> pipeline::Result<Vec<Pilot>> {
        self.filter_service.filter_current()
    }

    /// Same fallback as the service: `Rookie` shows everyone.
    pub fn show_by_category(&mut self, category: PilotCategory) -> pipeline::Result<Vec<Pilot>> {
        self.filter_service.filter_by_category(category)
    }

    /// Last category reported by a notifying query; `All` initially.
    pub fn get_active_category(&self) -> PilotCategory {
        self.state.borrow().active_category
    }

    pub fn get_all_pilots(&self) -> Vec<Pilot> {
        self.filter_service.get_all_pilots()
    }

    /// The wrapped service, for silent ad hoc queries.
    pub fn filter_service(&self) -> &PilotFilterService {
        &self.filter_service
    }

    /// Append a pilot, then emit "data changed".
    pub fn add_pilot(&mut self, pilot: Pilot) -> pipeline::Result<()> {
        self.filter_service.add_pilot(pilot);
        self.state.borrow_mut().notify_data_changed()
    }

    /// Append pilots in order, then emit "data changed" once.
    pub fn add_pilots(&mut self, pilots: impl IntoIterator<Item = Pilot>) -> pipeline::Result<()> {
        self.filter_service.add_pilots(pilots);
        self.state.borrow_mut().notify_data_changed()
    }

    pub fn add_listener(&mut self, listener: impl ControllerListener + 'static) -> ListenerId {
        self.state.borrow_mut().listeners.add(Box::new(listener))
    }

    /// Removing an id that isn't registered is a no-op and returns false.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.state.borrow_mut().listeners.remove(id)
    }
}

impl Default for PilotController {
    fn default() -> Self {
        Self::new()
    }
}
