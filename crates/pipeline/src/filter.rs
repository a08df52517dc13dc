//! Composable pilot predicates.
//!
//! A `PilotFilter` is a named boolean test over a `Pilot`. Filters are
//! cheap to clone and can be combined with `and`/`or` without consuming
//! the operands, so a filter built once can be reused across queries.

use roster::{Pilot, PilotCategory};
use std::fmt;
use std::sync::Arc;

type Predicate = dyn Fn(&Pilot) -> bool + Send + Sync;

/// A reusable boolean test over a pilot.
///
/// The name is only used for logging/debugging.
#[derive(Clone)]
pub struct PilotFilter {
    name: String,
    predicate: Arc<Predicate>,
}

impl PilotFilter {
    /// Wrap a closure as a filter.
    pub fn new(
        name: impl Into<String>,
        predicate: impl Fn(&Pilot) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Returns the name of this filter (for logging/debugging)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if `pilot` passes this filter.
    pub fn test(&self, pilot: &Pilot) -> bool {
        (self.predicate)(pilot)
    }

    /// Accepts every pilot when `category` is `All`, otherwise only pilots
    /// whose category code equals the category's code exactly.
    pub fn by_category(category: PilotCategory) -> Self {
        if category == PilotCategory::All {
            return Self::new("category=all", |_| true);
        }
        let code = category.code();
        Self::new(format!("category={code}"), move |pilot| pilot.category == code)
    }

    pub fn by_active_status(active: bool) -> Self {
        Self::new(format!("active={active}"), move |pilot| pilot.active == active)
    }

    /// Accepts pilots with at least `min_championships` titles.
    ///
    /// Any threshold at or below zero accepts everyone.
    pub fn by_minimum_championships(min_championships: i64) -> Self {
        Self::new(
            format!("championships>={min_championships}"),
            move |pilot| i64::from(pilot.championships) >= min_championships,
        )
    }

    /// Case-insensitive team match.
    pub fn by_team(team: &str) -> Self {
        let wanted = team.to_lowercase();
        Self::new(format!("team~={team}"), move |pilot| {
            pilot.team.to_lowercase() == wanted
        })
    }

    /// Both filters must pass. `other` is skipped when `self` rejects.
    pub fn and(&self, other: &PilotFilter) -> PilotFilter {
        let (left, right) = (self.predicate.clone(), other.predicate.clone());
        PilotFilter {
            name: format!("({} AND {})", self.name, other.name),
            predicate: Arc::new(move |pilot: &Pilot| left(pilot) && right(pilot)),
        }
    }

    /// Either filter may pass. `other` is skipped when `self` accepts.
    pub fn or(&self, other: &PilotFilter) -> PilotFilter {
        let (left, right) = (self.predicate.clone(), other.predicate.clone());
        PilotFilter {
            name: format!("({} OR {})", self.name, other.name),
            predicate: Arc::new(move |pilot: &Pilot| left(pilot) || right(pilot)),
        }
    }
}

impl fmt::Debug for PilotFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PilotFilter").field(&self.name).finish()
    }
}
