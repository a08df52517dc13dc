//! Listener interface for controller events.

use roster::{Pilot, PilotCategory};

type FilterChangedHook = Box<dyn FnMut(PilotCategory, &[Pilot]) -> anyhow::Result<()>>;
type DataChangedHook = Box<dyn FnMut() -> anyhow::Result<()>>;

/// Receives controller events. Both hooks default to doing nothing.
///
/// Returning `Err` aborts the notification; the error is returned from the
/// controller call that triggered it.
pub trait ControllerListener {
    /// A notifying query ran; `pilots` is its result.
    fn on_filter_changed(&mut self, _category: PilotCategory, _pilots: &[Pilot]) -> anyhow::Result<()> {
        Ok(())
    }

    /// Pilots were added through the controller.
    fn on_data_changed(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A `ControllerListener` built from optional closures.
///
/// ```ignore
/// controller.add_listener(ListenerHooks::new().when_data_changed(|| {
///     println!("roster changed");
///     Ok(())
/// }));
/// ```
#[derive(Default)]
pub struct ListenerHooks {
    filter_changed: Option<FilterChangedHook>,
    data_changed: Option<DataChangedHook>,
}

impl ListenerHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn when_filter_changed(
        mut self,
        hook: impl FnMut(PilotCategory, &[Pilot]) -> anyhow::Result<()> + 'static,
    ) -> Self {
        self.filter_changed = Some(Box::new(hook));
        self
    }

    pub fn when_data_changed(mut self, hook: impl FnMut() -> anyhow::Result<()> + 'static) -> Self {
        self.data_changed = Some(Box::new(hook));
        self
    }
}

impl ControllerListener for ListenerHooks {
    fn on_filter_changed(&mut self, category: PilotCategory, pilots: &[Pilot]) -> anyhow::Result<()> {
        match self.filter_changed.as_mut() {
            Some(hook) => hook(category, pilots),
            None => Ok(()),
        }
    }

    fn on_data_changed(&mut self) -> anyhow::Result<()> {
        match self.data_changed.as_mut() {
            Some(hook) => hook(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Silent;
    impl ControllerListener for Silent {}

    #[test]
    fn test_default_hooks_are_noops() {
        let mut listener = Silent;
        assert!(listener.on_filter_changed(PilotCategory::All, &[]).is_ok());
        assert!(listener.on_data_changed().is_ok());

        let mut hooks = ListenerHooks::new();
        assert!(hooks.on_filter_changed(PilotCategory::Legend, &[]).is_ok());
        assert!(hooks.on_data_changed().is_ok());
    }

    #[test]
    fn test_hooks_are_independent() {
        let data_calls = Rc::new(Cell::new(0));
        let counter = data_calls.clone();
        let mut hooks = ListenerHooks::new().when_data_changed(move || {
            counter.set(counter.get() + 1);
            Ok(())
        });

        hooks.on_filter_changed(PilotCategory::Current, &[]).unwrap();
        hooks.on_data_changed().unwrap();

        assert_eq!(data_calls.get(), 1);
    }
}
