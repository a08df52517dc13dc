//! The PilotFilterService owns the roster and answers filter queries.
//!
//! The three category queries (`filter_all`, `filter_legends`,
//! `filter_current`) and `filter_by_category` notify registered listeners
//! with the result. `filter` and `filter_by_multiple_criteria` are silent.
//!
//! Every query returns a fresh `Vec`; mutating a result never touches the
//! service's own list.

use crate::error::{FilterError, Result};
use crate::filter::PilotFilter;
use crate::listeners::{ListenerId, ListenerRegistry};
use roster::{Pilot, PilotCategory};

/// Callback invoked with each notified result set.
pub type FilterListener = Box<dyn FnMut(PilotCategory, &[Pilot]) -> anyhow::Result<()>>;

/// Owns an ordered pilot list (duplicates allowed) and its listeners.
///
/// Not thread-safe: listeners are plain `FnMut` boxes and are invoked
/// synchronously on the caller's thread.
pub struct PilotFilterService {
    pilots: Vec<Pilot>,
    listeners: ListenerRegistry<FilterListener>,
}

impl PilotFilterService {
    /// Create an empty service.
    pub fn new() -> Self {
        Self {
            pilots: Vec::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    /// Create a service holding a copy of `pilots`, in order.
    pub fn with_pilots(pilots: impl IntoIterator<Item = Pilot>) -> Self {
        Self {
            pilots: pilots.into_iter().collect(),
            listeners: ListenerRegistry::new(),
        }
    }

    // =========================================================================
    // Notifying queries
    // =========================================================================

    /// Copy of the whole roster; notifies with `All`.
    pub fn filter_all(&mut self) -> Result<Vec<Pilot>> {
        let result = self.pilots.clone();
        self.notify_filtered(PilotCategory::All, &result)?;
        Ok(result)
    }

    /// Pilots whose category is `legend`; notifies with `Legend`.
    pub fn filter_legends(&mut self) -> Result<Vec<Pilot>> {
        let result = self.filter(&PilotFilter::by_category(PilotCategory::Legend));
        self.notify_filtered(PilotCategory::Legend, &result)?;
        Ok(result)
    }

    /// Pilots whose category is `current`; notifies with `Current`.
    pub fn filter_current(&mut self) -> Result<Vec<Pilot>> {
        let result = self.filter(&PilotFilter::by_category(PilotCategory::Current));
        self.notify_filtered(PilotCategory::Current, &result)?;
        Ok(result)
    }

    /// Dispatch to the matching category query.
    ///
    /// `Rookie` has no dedicated query and falls back to `filter_all`,
    /// which notifies with `All`.
    pub fn filter_by_category(&mut self, category: PilotCategory) -> Result<Vec<Pilot>> {
        match category {
            PilotCategory::All => self.filter_all(),
            PilotCategory::Legend => self.filter_legends(),
            PilotCategory::Current => self.filter_current(),
            PilotCategory::Rookie => self.filter_all(),
        }
    }

    // =========================================================================
    // Silent queries
    // =========================================================================

    /// Pilots passing `filter`, in roster order. Does not notify.
    pub fn filter(&self, filter: &PilotFilter) -> Vec<Pilot> {
        tracing::debug!(
            "Applying filter: {} (input count: {})",
            filter.name(),
            self.pilots.len()
        );
        let result: Vec<Pilot> = self
            .pilots
            .iter()
            .filter(|pilot| filter.test(pilot))
            .cloned()
            .collect();
        tracing::debug!(
            "Filter applied: {} (output count: {})",
            filter.name(),
            result.len()
        );
        result
    }

    /// `category AND active == active_only AND championships >= min`.
    ///
    /// `active_only = false` selects inactive pilots, not "any". Does not
    /// notify.
    pub fn filter_by_multiple_criteria(
        &self,
        category: PilotCategory,
        active_only: bool,
        min_championships: i64,
    ) -> Vec<Pilot> {
        let combined = PilotFilter::by_category(category)
            .and(&PilotFilter::by_active_status(active_only))
            .and(&PilotFilter::by_minimum_championships(min_championships));
        self.filter(&combined)
    }

    // =========================================================================
    // Data management (never notifies)
    // =========================================================================

    pub fn add_pilot(&mut self, pilot: Pilot) {
        self.pilots.push(pilot);
    }

    pub fn add_pilots(&mut self, pilots: impl IntoIterator<Item = Pilot>) {
        self.pilots.extend(pilots);
    }

    /// Defensive copy of the roster.
    pub fn get_all_pilots(&self) -> Vec<Pilot> {
        self.pilots.clone()
    }

    pub fn clear_pilots(&mut self) {
        self.pilots.clear();
    }

    pub fn pilot_count(&self) -> usize {
        self.pilots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pilots.is_empty()
    }

    // =========================================================================
    // Listeners
    // =========================================================================

    pub fn add_filter_listener(
        &mut self,
        listener: impl FnMut(PilotCategory, &[Pilot]) -> anyhow::Result<()> + 'static,
    ) -> ListenerId {
        self.listeners.add(Box::new(listener))
    }

    /// Removing an id that isn't registered is a no-op and returns false.
    pub fn remove_filter_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Call listeners in registration order; the first failure stops the loop.
    fn notify_filtered(&mut self, category: PilotCategory, results: &[Pilot]) -> Result<()> {
        tracing::debug!(
            "Notifying {} listener(s): {} ({} pilots)",
            self.listeners.len(),
            category,
            results.len()
        );
        for listener in self.listeners.iter_mut() {
            listener(category, results)
                .map_err(|source| FilterError::ListenerFailed { category, source })?;
        }
        Ok(())
    }
}

impl Default for PilotFilterService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::sample_pilots;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn names(pilots: &[Pilot]) -> Vec<&str> {
        pilots.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_service() {
        let mut service = PilotFilterService::new();

        assert!(service.is_empty());
        assert!(service.filter_all().unwrap().is_empty());
        assert!(service.filter_legends().unwrap().is_empty());
    }

    #[test]
    fn test_filter_all_returns_independent_copy() {
        let mut service = PilotFilterService::with_pilots(sample_pilots());

        let mut result = service.filter_all().unwrap();
        assert_eq!(result, sample_pilots());

        result.clear();
        result.push(Pilot::default());
        assert_eq!(service.get_all_pilots(), sample_pilots());
    }

    #[test]
    fn test_category_queries_preserve_order() {
        let mut service = PilotFilterService::with_pilots(sample_pilots());

        assert_eq!(
            names(&service.filter_legends().unwrap()),
            vec!["Ayrton Senna", "Michael Schumacher"]
        );
        assert_eq!(
            names(&service.filter_current().unwrap()),
            vec!["Lewis Hamilton", "Max Verstappen", "Sebastian Vettel", "Fernando Alonso"]
        );
    }

    #[test]
    fn test_rookie_falls_back_to_all() {
        let mut service = PilotFilterService::with_pilots(sample_pilots());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        service.add_filter_listener(move |category, _| {
            sink.borrow_mut().push(category);
            Ok(())
        });

        let result = service.filter_by_category(PilotCategory::Rookie).unwrap();
        assert_eq!(result.len(), 7);
        assert_eq!(*seen.borrow(), vec![PilotCategory::All]);
    }

    #[test]
    fn test_silent_queries_do_not_notify() {
        let mut service = PilotFilterService::with_pilots(sample_pilots());
        let calls = Rc::new(RefCell::new(0));
        let counter = calls.clone();
        service.add_filter_listener(move |_, _| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        service.filter(&PilotFilter::by_active_status(true));
        service.filter_by_multiple_criteria(PilotCategory::Legend, true, 3);
        service.add_pilot(Pilot::default());
        service.clear_pilots();

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_multiple_criteria_on_sample() {
        let service = PilotFilterService::with_pilots(sample_pilots());

        assert!(service
            .filter_by_multiple_criteria(PilotCategory::Legend, true, 3)
            .is_empty());
        assert_eq!(
            names(&service.filter_by_multiple_criteria(PilotCategory::Legend, false, 3)),
            vec!["Ayrton Senna", "Michael Schumacher"]
        );
        assert_eq!(
            names(&service.filter_by_multiple_criteria(PilotCategory::Current, true, 4)),
            vec!["Lewis Hamilton", "Sebastian Vettel"]
        );
    }

    #[test]
    fn test_add_and_clear() {
        let mut service = PilotFilterService::new();
        service.add_pilot(Pilot::new("A", "current", 1, "T", true));
        service.add_pilots(vec![
            Pilot::new("B", "legend", 2, "T", false),
            Pilot::new("A", "current", 1, "T", true),
        ]);

        assert_eq!(names(&service.get_all_pilots()), vec!["A", "B", "A"]);
        assert_eq!(service.pilot_count(), 3);

        service.clear_pilots();
        assert!(service.get_all_pilots().is_empty());
    }

    #[test]
    fn test_failing_listener_stops_notification() {
        let mut service = PilotFilterService::with_pilots(sample_pilots());
        let later_called = Rc::new(RefCell::new(false));
        let flag = later_called.clone();

        service.add_filter_listener(|_, _| Err(anyhow::anyhow!("display unavailable")));
        service.add_filter_listener(move |_, _| {
            *flag.borrow_mut() = true;
            Ok(())
        });

        let err = service.filter_legends().unwrap_err();
        assert!(matches!(
            err,
            FilterError::ListenerFailed { category: PilotCategory::Legend, .. }
        ));
        assert!(err.to_string().contains("display unavailable"));
        assert!(!*later_called.borrow());
    }
}
