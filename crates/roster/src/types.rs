//! Core domain types for the pilot roster.
//!
//! `Pilot` is a plain value; its `category` is kept as the raw code text so
//! that records with codes outside `PilotCategory` can still be held (they
//! simply never match a category filter).

use crate::error::RosterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Pilot
// =============================================================================

/// One driver's record.
///
/// No identity beyond value equality: two pilots with the same fields are
/// the same pilot as far as the roster is concerned.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pilot {
    pub name: String,
    /// Category code, normally one of the `PilotCategory` codes
    pub category: String,
    pub championships: u32,
    pub team: String,
    pub active: bool,
}

impl Pilot {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        championships: u32,
        team: impl Into<String>,
        active: bool,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            championships,
            team: team.into(),
            active,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_championships(&mut self, championships: u32) {
        self.championships = championships;
    }

    pub fn set_team(&mut self, team: impl Into<String>) {
        self.team = team.into();
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Pilot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pilot{{name='{}', category='{}', championships={}, team='{}', active={}}}",
            self.name, self.category, self.championships, self.team, self.active
        )
    }
}

// =============================================================================
// PilotCategory
// =============================================================================

/// Classification buckets for pilots.
///
/// Each variant carries a stable code (matched against `Pilot::category`)
/// and a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PilotCategory {
    All,
    Legend,
    Current,
    Rookie,
}

impl PilotCategory {
    /// Every category, in declaration order
    pub const VALUES: [PilotCategory; 4] = [
        PilotCategory::All,
        PilotCategory::Legend,
        PilotCategory::Current,
        PilotCategory::Rookie,
    ];

    pub fn code(self) -> &'static str {
        match self {
            PilotCategory::All => "all",
            PilotCategory::Legend => "legend",
            PilotCategory::Current => "current",
            PilotCategory::Rookie => "rookie",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PilotCategory::All => "Todos",
            PilotCategory::Legend => "Lendas",
            PilotCategory::Current => "Atuais",
            PilotCategory::Rookie => "Novatos",
        }
    }

    /// Look up a category by its exact code, falling back to `All`.
    ///
    /// Never fails. Use `str::parse` when an unknown code should be an error.
    pub fn from_code(code: &str) -> Self {
        Self::lookup(code).unwrap_or(PilotCategory::All)
    }

    fn lookup(code: &str) -> Option<Self> {
        Self::VALUES.into_iter().find(|category| category.code() == code)
    }
}

impl FromStr for PilotCategory {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| RosterError::UnknownCategory {
            code: s.to_string(),
        })
    }
}

impl fmt::Display for PilotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_known_and_unknown() {
        assert_eq!(PilotCategory::from_code("legend"), PilotCategory::Legend);
        assert_eq!(PilotCategory::from_code("rookie"), PilotCategory::Rookie);
        assert_eq!(PilotCategory::from_code("bogus"), PilotCategory::All);
        assert_eq!(PilotCategory::from_code(""), PilotCategory::All);
        // Codes are case-sensitive
        assert_eq!(PilotCategory::from_code("LEGEND"), PilotCategory::All);
    }

    #[test]
    fn test_strict_parse_rejects_unknown() {
        assert_eq!("current".parse::<PilotCategory>().unwrap(), PilotCategory::Current);

        let err = "bogus".parse::<PilotCategory>().unwrap_err();
        assert!(matches!(err, RosterError::UnknownCategory { ref code } if code == "bogus"));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes: Vec<_> = PilotCategory::VALUES.iter().map(|c| c.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), PilotCategory::VALUES.len());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(PilotCategory::All.display_name(), "Todos");
        assert_eq!(PilotCategory::Legend.display_name(), "Lendas");
        assert_eq!(PilotCategory::Current.display_name(), "Atuais");
        assert_eq!(PilotCategory::Rookie.display_name(), "Novatos");
        assert_eq!(PilotCategory::Legend.to_string(), "legend");
    }

    #[test]
    fn test_pilot_display() {
        let pilot = Pilot::new("Ayrton Senna", "legend", 3, "McLaren", false);
        assert_eq!(
            pilot.to_string(),
            "Pilot{name='Ayrton Senna', category='legend', championships=3, team='McLaren', active=false}"
        );
    }

    #[test]
    fn test_pilot_setters() {
        let mut pilot = Pilot::default();
        pilot.set_name("Oscar Piastri");
        pilot.set_category("rookie");
        pilot.set_championships(1);
        pilot.set_team("McLaren");
        pilot.set_active(true);

        assert_eq!(pilot, Pilot::new("Oscar Piastri", "rookie", 1, "McLaren", true));
    }
}
