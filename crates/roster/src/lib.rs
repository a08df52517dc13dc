//! # Roster Crate
//!
//! Domain types for the pilot roster and ways to obtain one.
//!
//! ## Main Components
//!
//! - **types**: `Pilot` records and the closed `PilotCategory` set
//! - **parser**: Load a roster from a JSON file
//! - **sample**: The built-in seven-pilot roster
//! - **error**: Error types for loading and strict parsing
//!
//! ## Example Usage
//!
//! ```ignore
//! use roster::{PilotCategory, parser::load_roster};
//!
//! let pilots = load_roster(Path::new("roster.json"))?;
//! let category = PilotCategory::from_code("legend");
//! println!("{} pilots, showing {}", pilots.len(), category.display_name());
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod sample;

// Re-export commonly used types for convenience
pub use error::{Result, RosterError};
pub use types::{Pilot, PilotCategory};
pub use sample::sample_pilots;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_roster_shape() {
        let pilots = sample_pilots();
        assert_eq!(pilots.len(), 7);

        let legends = pilots.iter().filter(|p| p.category == "legend").count();
        let current = pilots.iter().filter(|p| p.category == "current").count();
        let rookies = pilots.iter().filter(|p| p.category == "rookie").count();
        assert_eq!((legends, current, rookies), (2, 4, 1));
    }

    #[test]
    fn test_sample_categories_are_known() {
        for pilot in sample_pilots() {
            assert!(pilot.category.parse::<PilotCategory>().is_ok(), "{}", pilot);
        }
    }
}
