//! Built-in sample roster used by the demo and tests.

use crate::types::Pilot;

/// The seven sample pilots, in their canonical order.
pub fn sample_pilots() -> Vec<Pilot> {
    vec![
        Pilot::new("Lewis Hamilton", "current", 7, "Mercedes", true),
        Pilot::new("Max Verstappen", "current", 3, "Red Bull", true),
        Pilot::new("Ayrton Senna", "legend", 3, "McLaren", false),
        Pilot::new("Michael Schumacher", "legend", 7, "Ferrari", false),
        Pilot::new("Sebastian Vettel", "current", 4, "Aston Martin", true),
        Pilot::new("Fernando Alonso", "current", 2, "Aston Martin", true),
        Pilot::new("Oscar Piastri", "rookie", 0, "McLaren", true),
    ]
}
